//! Facts about the thesis itself, used to greet the user and by `status`.

use cryochat_core::Message;

/// Descriptive metadata for the thesis behind the assistant.
#[derive(Debug, Clone, Copy)]
pub struct ThesisInfo {
    pub author: &'static str,
    pub affiliation: &'static str,
    pub scope: &'static str,
    /// (parameter, value) pairs
    pub key_parameters: &'static [(&'static str, &'static str)],
    pub core_topics: &'static [&'static str],
}

pub static THESIS: ThesisInfo = ThesisInfo {
    author: "Mohamed Aouad",
    affiliation: "UGA 2022",
    scope: "Modeling 28nm FDSOI transistors for Quantum Computing control interfaces at deep cryogenic temperatures (4.2K).",
    key_parameters: &[
        ("Temp Range", "4K - 300K"),
        ("Node", "28nm FDSOI"),
        ("Statistics", "Fermi-Dirac"),
        ("Mobility", "Bell-shape"),
    ],
    core_topics: &["Cryo-Physics", "Numerical Model", "Compact Model"],
};

pub const INITIAL_GREETING: &str = "Hello! I am the digital interface for Mohamed Aouad's PhD thesis on FDSOI Cryogenic Modeling. I can explain technical concepts, compare models (BSIM/L-UTSOI), or walk you through the physics of transistors at 4K. How can I help you today?";

/// Starter questions offered with the greeting.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "Why does Maxwell-Boltzmann statistics break down at 4K?",
    "What is the numerical stability challenge in your model?",
    "How does this model differ from BSIM or L-UTSOI?",
    "Explain the Poisson-Schrödinger simulation procedure.",
];

/// The opening bot message of every conversation.
pub fn greeting() -> Message {
    Message::bot(INITIAL_GREETING).with_related_questions(SUGGESTED_QUESTIONS)
}
