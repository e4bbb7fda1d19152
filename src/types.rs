//! Result types returned by the scorer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative strength label derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl Strength {
    /// Maps a final score onto its label.
    ///
    /// | score | label |
    /// |-------|-------|
    /// | 6+    | Very Strong |
    /// | 5     | Strong |
    /// | 3..=4 | Medium |
    /// | 1..=2 | Weak |
    /// | 0     | Very Weak |
    pub fn from_score(score: u32) -> Self {
        match score {
            6.. => Strength::VeryStrong,
            5 => Strength::Strong,
            3..=4 => Strength::Medium,
            1..=2 => Strength::Weak,
            0 => Strength::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single evaluation. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub strength: Strength,
    pub score: u32,
    pub suggestions: Vec<String>,
}

impl ScoreResult {
    pub(crate) fn new(score: u32, suggestions: Vec<String>) -> Self {
        Self {
            strength: Strength::from_score(score),
            score,
            suggestions,
        }
    }
}
