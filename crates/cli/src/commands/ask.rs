//! `cryochat ask` — Single-question mode.

use cryochat_agent::Session;
use cryochat_core::Complexity;
use cryochat_knowledge::ScoredSection;

use crate::render::print_reply;

pub struct AskOptions {
    pub complexity: Option<Complexity>,
    pub json: bool,
    pub explain: bool,
    pub no_delay: bool,
}

fn print_ranking(ranked: &[ScoredSection]) {
    if ranked.is_empty() {
        eprintln!("  No section matched.");
    }
    for (i, hit) in ranked.iter().enumerate() {
        eprintln!(
            "  {}. {:<22} score {}  ({}, p.{})",
            i + 1,
            hit.section.id,
            hit.score,
            hit.section.chapter(),
            hit.section.page_start
        );
    }
}

/// The ranking as JSON, best match first.
fn ranking_json(ranked: &[ScoredSection]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(ranked)
}

pub async fn run(question: &str, options: AskOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let complexity = options.complexity.unwrap_or(config.complexity);
    let thesis = super::thesis_responder(&config, options.no_delay);

    if options.explain {
        let ranked = thesis.matcher().rank(question);
        if options.json {
            eprintln!("{}", ranking_json(&ranked)?);
        } else {
            print_ranking(&ranked);
        }
    }

    let responder = super::with_retries(thesis, &config);
    let mut session = Session::new(complexity);

    if !options.json {
        eprint!("  Thinking...");
    }
    let reply = session.submit(responder.as_ref(), question).await;
    if !options.json {
        eprint!("\r              \r");
    }
    let reply = reply?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        print_reply(&reply, &config.display);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryochat_knowledge::Matcher;

    #[test]
    fn ranking_json_lists_sections_best_first() {
        let ranked = Matcher::default().rank("cryogenic temperatures");
        let json: serde_json::Value = serde_json::from_str(&ranking_json(&ranked).unwrap()).unwrap();

        let hits = json.as_array().unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0]["section"]["id"], "mobility");
        assert_eq!(hits[0]["score"], 2);
        assert_eq!(hits[1]["section"]["id"], "intro-mb-breakdown");
        assert_eq!(hits[1]["score"], 0);
    }

    #[test]
    fn ranking_json_for_no_match_is_empty_array() {
        let ranked = Matcher::default().rank("zzqqxx nonsense");
        assert_eq!(ranking_json(&ranked).unwrap(), "[]");
    }
}
