//! Response-style presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed personalities offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Personality {
    #[default]
    Friendly,
    Professional,
    Casual,
}

impl Personality {
    /// All personalities in selector order
    pub const ALL: [Personality; 3] = [
        Personality::Friendly,
        Personality::Professional,
        Personality::Casual,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Personality::Friendly => "Friendly",
            Personality::Professional => "Professional",
            Personality::Casual => "Casual",
        }
    }

    /// Instruction text prefixed to every turn
    pub fn instruction(self) -> &'static str {
        match self {
            Personality::Friendly => "Respond in a friendly and approachable manner.",
            Personality::Professional => {
                "Respond briefly and clearly, be professional and concise."
            }
            Personality::Casual => "Respond in a casual, informal, friendly way.",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown personality: {0}")]
pub struct UnknownPersonality(pub String);

impl FromStr for Personality {
    type Err = UnknownPersonality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Personality::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPersonality(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_mapping() {
        assert_eq!(
            Personality::Friendly.instruction(),
            "Respond in a friendly and approachable manner."
        );
        assert_eq!(
            Personality::Professional.instruction(),
            "Respond briefly and clearly, be professional and concise."
        );
        assert_eq!(
            Personality::Casual.instruction(),
            "Respond in a casual, informal, friendly way."
        );
    }

    #[test]
    fn test_default_is_first_option() {
        assert_eq!(Personality::default(), Personality::ALL[0]);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("Professional".parse::<Personality>().unwrap(), Personality::Professional);
        assert_eq!(" casual ".parse::<Personality>().unwrap(), Personality::Casual);
        assert!("Grumpy".parse::<Personality>().is_err());
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Personality::Professional).unwrap();
        assert_eq!(json, "\"Professional\"");
        let parsed: Personality = serde_json::from_str("\"Casual\"").unwrap();
        assert_eq!(parsed, Personality::Casual);
    }
}
