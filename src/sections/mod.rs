//! Password scoring sections
//!
//! Each section inspects one aspect of the password and updates the
//! running [`Tally`]. The evaluator calls them in a fixed order.

pub(crate) mod common;
pub(crate) mod dictionary;
pub(crate) mod length;
pub(crate) mod pattern;
pub(crate) mod variety;

pub use common::common_password_section;
pub use dictionary::dictionary_word_section;
pub use length::length_section;
pub use pattern::{repeated_character_section, sequential_run_section};
pub use variety::character_variety_section;

/// Running score and suggestions shared by the sections.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    pub suggestions: Vec<String>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reward(&mut self, points: u32) {
        self.score += points;
    }

    pub fn suggest(&mut self, suggestion: &str) {
        self.suggestions.push(suggestion.to_string());
    }

    /// Subtracts `points`, flooring at zero, and records why.
    pub fn penalize(&mut self, points: u32, suggestion: &str) {
        self.score = self.score.saturating_sub(points);
        self.suggest(suggestion);
    }
}
