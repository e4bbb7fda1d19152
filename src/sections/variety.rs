//! Character variety section - lowercase, uppercase, digits, special chars.

use super::Tally;

pub const MISSING_LOWERCASE: &str = "Include lowercase letters (a-z)";
pub const MISSING_UPPERCASE: &str = "Include uppercase letters (A-Z)";
pub const MISSING_DIGIT: &str = "Include numbers (0-9)";
pub const MISSING_SPECIAL: &str = "Include special characters (!@#$%^&*)";

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

fn is_special(c: &char) -> bool {
    SPECIAL_CHARS.contains(*c)
}

/// Awards +1 per ASCII character class present and suggests each missing one.
///
/// Classes are checked independently. Non-ASCII characters belong to none.
pub fn character_variety_section(password: &str, tally: &mut Tally) {
    let classes: [(fn(&char) -> bool, &str); 4] = [
        (char::is_ascii_lowercase, MISSING_LOWERCASE),
        (char::is_ascii_uppercase, MISSING_UPPERCASE),
        (char::is_ascii_digit, MISSING_DIGIT),
        (is_special, MISSING_SPECIAL),
    ];

    for (matches, suggestion) in classes {
        if password.chars().any(|c| matches(&c)) {
            tally.reward(1);
        } else {
            tally.suggest(suggestion);
        }
    }
}
