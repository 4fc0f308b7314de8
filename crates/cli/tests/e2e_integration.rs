//! End-to-end integration tests for the cryochat thesis assistant.
//!
//! These tests exercise the full pipeline from user input to the reply
//! record, including matching, composition, retries and the session gate.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use cryochat_agent::{RetryingResponder, Session, ThesisResponder};
use cryochat_config::AppConfig;
use cryochat_core::error::{ResponderError, SessionError};
use cryochat_core::{Complexity, Message, Responder, Sender};
use cryochat_knowledge::{ContentStore, Matcher, SUGGESTED_QUESTIONS};

// ── Helpers ──────────────────────────────────────────────────────────────

fn instant_responder() -> ThesisResponder {
    ThesisResponder::default().with_delay(Duration::ZERO)
}

/// Fails with the scripted errors in order, then defers to the thesis.
struct UnreliableBackend {
    failures: Mutex<Vec<ResponderError>>,
    inner: ThesisResponder,
}

impl UnreliableBackend {
    fn new(failures: Vec<ResponderError>) -> Self {
        Self {
            failures: Mutex::new(failures),
            inner: instant_responder(),
        }
    }
}

#[async_trait::async_trait]
impl Responder for UnreliableBackend {
    fn name(&self) -> &str {
        "unreliable"
    }

    async fn respond(
        &self,
        query: &str,
        complexity: Complexity,
    ) -> Result<Message, ResponderError> {
        let next = {
            let mut failures = self.failures.lock().unwrap();
            if failures.is_empty() {
                None
            } else {
                Some(failures.remove(0))
            }
        };
        match next {
            Some(err) => Err(err),
            None => self.inner.respond(query, complexity).await,
        }
    }
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[tokio::test]
async fn e2e_maxwell_breakdown_simple() {
    let mut session = Session::new(Complexity::Simple);
    let reply = session
        .submit(
            &instant_responder(),
            "Why does Maxwell-Boltzmann statistics break down at 4K?",
        )
        .await
        .unwrap();

    assert_eq!(reply.sender, Sender::Bot);
    assert!(reply.text.contains("**Fermi-Dirac statistics**"));

    let citations = reply.citations.expect("matched sections must be cited");
    assert_eq!(citations[0].id, "intro-mb-breakdown");
    assert_eq!(citations[0].text, "Maxwell-Boltzmann Approximation Breakdown");
    assert_eq!(citations[0].section, "Chapter 2");
    assert_eq!(citations[0].page, 15);
}

#[tokio::test]
async fn e2e_nonsense_falls_back() {
    for complexity in [Complexity::Simple, Complexity::Rigorous] {
        let mut session = Session::new(complexity);
        let reply = session
            .submit(&instant_responder(), "zzqqxx nonsense")
            .await
            .unwrap();

        assert!(reply.text.contains("Poisson-Schrödinger procedure"));
        assert!(reply.citations.is_none());
        assert_eq!(
            reply.related_questions.unwrap(),
            vec![
                "Tell me about the mobility model.",
                "What about short channel effects?"
            ]
        );
    }
}

#[tokio::test]
async fn e2e_numerical_stability_rigorous() {
    let mut session = Session::new(Complexity::Rigorous);
    let reply = session
        .submit(&instant_responder(), "numerical stability")
        .await
        .unwrap();

    assert!(reply.text.contains("**Extended Quantum Shift Function**"));
    assert_eq!(reply.citations.unwrap()[0].id, "numerical-stability");
    assert_eq!(
        reply.related_questions.unwrap()[0],
        "Show me the equation for the extended quantum shift."
    );
}

#[tokio::test]
async fn e2e_maxwell_and_poisson_prefers_statistics_follow_ups() {
    let mut session = Session::default();
    let reply = session
        .submit(&instant_responder(), "Compare the Maxwell picture with the Poisson solver")
        .await
        .unwrap();

    assert_eq!(
        reply.related_questions.unwrap(),
        vec![
            "How do you handle the calculation at exactly 0 Kelvin?",
            "What is the impact on the subthreshold slope?"
        ]
    );
}

#[tokio::test]
async fn e2e_every_starter_question_is_answered_with_citations() {
    let responder = instant_responder();
    for question in SUGGESTED_QUESTIONS {
        for complexity in [Complexity::Simple, Complexity::Rigorous] {
            let reply = responder.respond(question, complexity).await.unwrap();
            let citations = reply.citations.expect(question);
            assert!(!citations.is_empty() && citations.len() <= 2, "{question}");
            assert_eq!(reply.related_questions.map(|q| q.len()), Some(2));
        }
    }
}

// ── Properties ───────────────────────────────────────────────────────────

#[test]
fn e2e_three_or_more_matches_cite_exactly_two() {
    let matcher = Matcher::new(ContentStore::thesis());
    let responder = instant_responder();

    for query in [
        "How does this model differ from BSIM or L-UTSOI?",
        "Why does Maxwell-Boltzmann statistics break down at 4K?",
        "cryogenic temperatures",
    ] {
        assert!(matcher.find(query).len() >= 3, "{query}");
        let reply = responder.reply(query, Complexity::Simple);
        assert_eq!(reply.citations.unwrap().len(), 2, "{query}");
    }
}

#[test]
fn e2e_reply_json_contract() {
    let reply = instant_responder().reply("zzqqxx nonsense", Complexity::Simple);
    let json = serde_json::to_value(&reply).unwrap();

    assert_eq!(json["sender"], "BOT");
    assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(json.get("timestamp").is_some());
    assert!(json.get("citations").is_none());
    assert_eq!(json["relatedQuestions"].as_array().unwrap().len(), 2);

    let matched = instant_responder().reply("phonon scattering", Complexity::Rigorous);
    let json = serde_json::to_value(&matched).unwrap();
    assert_eq!(json["citations"][0]["id"], "mobility");
    assert_eq!(json["citations"][0]["section"], "Chapter 2");
    assert_eq!(json["citations"][0]["page"], 31);
}

// ── Failure handling ─────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn e2e_transient_backend_failures_are_retried() {
    let backend = Arc::new(UnreliableBackend::new(vec![
        ResponderError::Network("connection reset".into()),
        ResponderError::Timeout("gateway".into()),
    ]));
    let responder = RetryingResponder::new(backend);
    let mut session = Session::default();

    let reply = session.submit(&responder, "poisson").await.unwrap();
    assert!(reply.text.starts_with("The simulation is like a conversation"));
    assert_eq!(session.transcript().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn e2e_malformed_backend_reply_discards_turn() {
    let backend = Arc::new(UnreliableBackend::new(vec![
        ResponderError::MalformedResponse("no text field".into()),
    ]));
    let responder = RetryingResponder::new(backend);
    let mut session = Session::default();

    let err = session.submit(&responder, "poisson").await.unwrap_err();
    assert!(err.to_string().contains("no text field"));

    // Placeholder removed, no bot reply, input accepted again.
    assert!(!session.is_pending());
    assert!(session.transcript().iter().all(|m| !m.is_typing));
    assert_eq!(session.transcript().len(), 2);

    let reply = session.submit(&responder, "poisson").await.unwrap();
    assert!(reply.citations.is_some());
}

#[tokio::test]
async fn e2e_manual_turn_blocks_reentry() {
    let responder = instant_responder();
    let mut session = Session::default();

    let turn = session.begin("mobility").unwrap();
    assert_eq!(session.begin("phonon").unwrap_err(), SessionError::Busy);

    let reply = responder.respond(turn.query(), turn.complexity()).await.unwrap();
    session.complete(turn, reply);

    assert!(!session.is_pending());
    let senders: Vec<Sender> = session.transcript().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
}

#[tokio::test(start_paused = true)]
async fn e2e_configured_delay_is_observed() {
    let config = AppConfig {
        response_delay_ms: 300,
        ..AppConfig::default()
    };
    let responder = ThesisResponder::from_config(&config);

    let started = tokio::time::Instant::now();
    responder.respond("quantum", Complexity::Simple).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(300));
}
