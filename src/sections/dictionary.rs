//! Dictionary word section - substring match against common words.

use crate::common::COMMON_WORDS;

use super::Tally;

pub const DICTIONARY_WORD: &str = "Avoid dictionary words";

/// Returns the first common word contained in the lowercased password.
pub fn find_dictionary_word(password: &str) -> Option<&'static str> {
    let lower = password.to_lowercase();
    COMMON_WORDS.iter().copied().find(|word| lower.contains(word))
}

/// Penalizes (-1) once if any common word appears in the password.
pub fn dictionary_word_section(password: &str, tally: &mut Tally) {
    if find_dictionary_word(password).is_some() {
        tally.penalize(1, DICTIONARY_WORD);
    }
}
