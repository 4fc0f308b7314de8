//! Complexity tier — which hand-authored variant of an answer to serve.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UnknownComplexity;

/// The two-valued selector choosing between the intuitive and the
/// academically rigorous rendition of an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Plain-language explanation for semi-technical readers
    #[default]
    Simple,
    /// Equations, boundary conditions and limitations for researchers
    Rigorous,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Rigorous => "rigorous",
        }
    }

    /// Label shown by the front-end's mode toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "Intuitive",
            Self::Rigorous => "Rigorous",
        }
    }

    /// The audience brief each tier is written against.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Simple => {
                "Explain this simply for a semi-technical stakeholder or undergraduate student. Focus on the 'Why' and 'What'."
            }
            Self::Rigorous => {
                "Explain this with academic rigor for a PhD researcher. Include specific equations concepts, boundary conditions, and limitations."
            }
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = UnknownComplexity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "intuitive" => Ok(Self::Simple),
            "rigorous" => Ok(Self::Rigorous),
            other => Err(UnknownComplexity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Rigorous".parse::<Complexity>().unwrap(), Complexity::Rigorous);
        assert_eq!(" simple ".parse::<Complexity>().unwrap(), Complexity::Simple);
        assert_eq!("intuitive".parse::<Complexity>().unwrap(), Complexity::Simple);
    }

    #[test]
    fn rejects_unknown_tier() {
        let err = "expert".parse::<Complexity>().unwrap_err();
        assert_eq!(err, UnknownComplexity("expert".into()));
    }

    #[test]
    fn defaults_to_simple() {
        assert_eq!(Complexity::default(), Complexity::Simple);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Complexity::Rigorous).unwrap();
        assert_eq!(json, "\"rigorous\"");
    }
}
