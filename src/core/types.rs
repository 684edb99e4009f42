use serde::{Deserialize, Serialize};

/// Atomic unit of text for both compression and matching.
///
/// Documents are handled as sequences of Unicode scalar values; every offset
/// and count in the crate is measured in `Symbol`s.
pub type Symbol = char;

/// Coarse bucket for a similarity percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityLevel {
    Low,
    Medium,
    High,
}

impl SimilarityLevel {
    /// Above 70% is high, above 40% medium, anything else low
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 70.0 {
            Self::High
        } else if percentage > 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for SimilarityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}
