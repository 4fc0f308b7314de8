//! Response composer — reply text, citations and follow-ups for a ranking.
//!
//! Text is picked by looking the top-ranked section's id up in
//! [`AUTHORED`]. Each entry may carry a hand-written answer per complexity
//! tier; anything not covered falls through to a generic template built from
//! the section itself. Adding a section therefore never needs new control
//! flow, only (optionally) a new table row.

use cryochat_core::{Citation, Complexity, Section};

/// Replies cite at most this many sections.
pub const MAX_CITATIONS: usize = 2;

/// Text served when no section matched the question.
pub const FALLBACK_TEXT: &str = "I'm sorry, I couldn't find specific information in the thesis regarding that query. I can answer questions about Maxwell-Boltzmann breakdown, Numerical Modeling, BSIM/L-UTSOI comparisons, or the Poisson-Schrödinger procedure.";

/// Hand-written answers for one section id.
struct Authored {
    id: &'static str,
    simple: Option<&'static str>,
    rigorous: Option<&'static str>,
}

impl Authored {
    fn text(&self, complexity: Complexity) -> Option<&'static str> {
        match complexity {
            Complexity::Simple => self.simple,
            Complexity::Rigorous => self.rigorous,
        }
    }
}

static AUTHORED: &[Authored] = &[
    Authored {
        id: "intro-mb-breakdown",
        simple: Some(
            "At very low temperatures (like 4 Kelvin), the standard math used for chips (Maxwell-Boltzmann) fails because it assumes electrons behave like a gas of distinct particles. In reality, at these temperatures, they behave more like a dense crowd (quantum degeneracy). If we use the old math, the equations try to divide by zero or produce impossibly huge numbers. We have to switch to **Fermi-Dirac statistics** to accurately count the electrons.",
        ),
        rigorous: Some(
            r#"The breakdown of Maxwell-Boltzmann (MB) statistics at cryogenic temperatures is twofold:
        
1. **Numerical:** The intrinsic carrier concentration $n_i$ scales as $\exp(-E_g/2kT)$. At 4.2K, $n_i \approx 10^{-678} cm^{-3}$, causing arithmetic underflow in IEEE double precision.
2. **Physical:** When the quasi-Fermi level $E_f$ approaches or exceeds the conduction band edge $E_c$ (degenerate regime), the Boltzmann approximation $f(E) \approx \exp(-(E-E_f)/kT)$ drastically overestimates carrier density compared to the correct Fermi-Dirac distribution $f(E) = 1 / (1 + \exp((E-E_f)/kT))$.

**Solution:** The model explicitly implements Fermi-Dirac integrals of order 0 ($F_0$) to describe the 2D electron gas density continuously from weak to strong inversion."#,
        ),
    },
    Authored {
        id: "model-comparison",
        simple: Some(
            "Think of standard models like BSIM or L-UTSOI as maps drawn for warm weather. To use them in the cold, engineers usually just add 'correction stickers' (empirical fittings). My model is different: I redrew the map specifically for the cold. It calculates the physics from the ground up using the correct statistics, so it doesn't crash or give weird results when the device turns on.",
        ),
        rigorous: None,
    },
    Authored {
        id: "numerical-stability",
        simple: Some(
            "A major challenge is that the math used to calculate the quantum effects has a 'kink' or a sharp point when the transistor switches from off to on (around zero charge). This sharp point makes circuit simulators crash. I created a mathematical 'bridge' (a smoothing function) that connects the off-state math to the on-state math smoothly, ensuring the simulation runs stable.",
        ),
        rigorous: Some(
            r#"The numerical instability arises from the **Quantum Shift** function $\Delta V(Q_g)$. 
        
Standard models approximate the potential well as triangular, leading to an Airy function solution where $\Delta V \propto Q_g^{2/3}$. The derivative of this function $d(\Delta V)/dQ_g$ diverges as $Q_g \to 0$ (singularity).

**Methodological Solution:**
I proposed an **Extended Quantum Shift Function** constructed via a piecewise smoothing technique:
1. **Linear Region (Weak Inversion):** $\Delta V \propto Q_g$
2. **Power Law Region (Strong Inversion):** $\Delta V \propto Q_g^{2/3}$
3. **Smoothing:** These are connected using a generalized smoothing formalism (Eq 4.17 in thesis) to ensure $C^\infty$ continuity for the gate-to-channel capacitance ($C_{gc}$)."#,
        ),
    },
    Authored {
        id: "ps-procedure",
        simple: Some(
            "The simulation is like a conversation between two laws of physics: **Poisson** (how voltage pushes charges) and **Schrödinger** (how quantum mechanics arranges charges). The computer guesses a voltage, asks Schrödinger where the electrons go, then asks Poisson if that voltage makes sense with those electrons. It repeats this loop until both agree. I tuned this specifically for 0 Kelvin.",
        ),
        rigorous: None,
    },
];

/// A keyword group and the follow-ups it triggers.
struct FollowUpRule {
    needles: &'static [&'static str],
    questions: [&'static str; 2],
}

/// Follow-up rules in priority order. The first rule with any needle in the
/// lowercased question wins.
static FOLLOW_UPS: &[FollowUpRule] = &[
    FollowUpRule {
        needles: &["maxwell", "statistics"],
        questions: [
            "How do you handle the calculation at exactly 0 Kelvin?",
            "What is the impact on the subthreshold slope?",
        ],
    },
    FollowUpRule {
        needles: &["stability", "numerical"],
        questions: [
            "Show me the equation for the extended quantum shift.",
            "How does this affect the C-V curves?",
        ],
    },
    FollowUpRule {
        needles: &["poisson"],
        questions: [
            "How do you handle boundary conditions?",
            "What happens to the intrinsic carrier concentration at 0K?",
        ],
    },
];

/// Suggestions when no keyword group applies.
pub const DEFAULT_FOLLOW_UPS: [&str; 2] = [
    "Tell me about the mobility model.",
    "What about short channel effects?",
];

/// Everything a reply needs besides its id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub text: String,
    /// `None` when nothing matched; never `Some(vec![])`.
    pub citations: Option<Vec<Citation>>,
    pub related_questions: Vec<String>,
}

/// Compose the reply for `query` from its ranked sections.
pub fn compose(query: &str, ranked: &[&Section], complexity: Complexity) -> Composition {
    let text = match ranked.first() {
        Some(primary) => response_text(primary, complexity),
        None => FALLBACK_TEXT.to_string(),
    };

    Composition {
        text,
        citations: citations(ranked),
        related_questions: follow_up_questions(query)
            .iter()
            .map(|q| q.to_string())
            .collect(),
    }
}

fn response_text(primary: &Section, complexity: Complexity) -> String {
    AUTHORED
        .iter()
        .find(|entry| entry.id == primary.id)
        .and_then(|entry| entry.text(complexity))
        .map(str::to_owned)
        .unwrap_or_else(|| generic_text(primary, complexity))
}

fn generic_text(section: &Section, complexity: Complexity) -> String {
    match complexity {
        Complexity::Simple => format!(
            "Here is a high-level summary based on section \"{}\": {}",
            section.title, section.content
        ),
        Complexity::Rigorous => format!(
            "**From Section: {}**\n\n{}\n\nThis approach ensures physical validity where $T \\to 0K$.",
            section.title, section.content
        ),
    }
}

fn citations(ranked: &[&Section]) -> Option<Vec<Citation>> {
    let citations: Vec<Citation> = ranked
        .iter()
        .take(MAX_CITATIONS)
        .map(|section| Citation::from(*section))
        .collect();
    if citations.is_empty() {
        None
    } else {
        Some(citations)
    }
}

/// Follow-up pair for a question. Depends only on the raw question text,
/// never on which sections matched.
pub fn follow_up_questions(query: &str) -> [&'static str; 2] {
    let q = query.to_lowercase();
    FOLLOW_UPS
        .iter()
        .find(|rule| rule.needles.iter().any(|needle| q.contains(*needle)))
        .map(|rule| rule.questions)
        .unwrap_or(DEFAULT_FOLLOW_UPS)
}
