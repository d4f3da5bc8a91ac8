//! Guideline letter codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// SEAD 4 adjudicative guideline letter.
///
/// Declaration order is the order search results are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GuidelineCode {
    /// Alcohol Consumption
    G,
    /// Drug Involvement and Substance Misuse
    H,
    /// Sexual Behavior
    D,
    /// Criminal Conduct
    J,
    /// Personal Conduct
    E,
}

impl GuidelineCode {
    /// All codes in reporting order.
    pub const ALL: [GuidelineCode; 5] = [
        GuidelineCode::G,
        GuidelineCode::H,
        GuidelineCode::D,
        GuidelineCode::J,
        GuidelineCode::E,
    ];

    /// Single-letter form.
    pub fn letter(&self) -> &'static str {
        match self {
            GuidelineCode::G => "G",
            GuidelineCode::H => "H",
            GuidelineCode::D => "D",
            GuidelineCode::J => "J",
            GuidelineCode::E => "E",
        }
    }

    /// Label used in citations, e.g. `Guideline G`.
    pub fn label(&self) -> String {
        format!("Guideline {}", self.letter())
    }
}

impl fmt::Display for GuidelineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for GuidelineCode {
    type Err = ValidationError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "G" => Ok(GuidelineCode::G),
            "H" => Ok(GuidelineCode::H),
            "D" => Ok(GuidelineCode::D),
            "J" => Ok(GuidelineCode::J),
            "E" => Ok(GuidelineCode::E),
            other => Err(ValidationError::invalid_format(
                "guideline_code",
                format!("unknown guideline '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("g".parse::<GuidelineCode>().unwrap(), GuidelineCode::G);
        assert_eq!(" J ".parse::<GuidelineCode>().unwrap(), GuidelineCode::J);
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!("Z".parse::<GuidelineCode>().is_err());
        assert!("".parse::<GuidelineCode>().is_err());
    }

    #[test]
    fn label_prefixes_guideline() {
        assert_eq!(GuidelineCode::H.label(), "Guideline H");
    }
}
