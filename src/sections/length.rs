//! Length section - rewards longer passwords.

use super::Tally;

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

pub const SHORT_PASSWORD: &str = "Use at least 8 characters (12+ recommended)";

/// Awards +2 for 12+ characters, +1 for 8-11, otherwise suggests more.
///
/// Length counts characters, not bytes.
pub fn length_section(password: &str, tally: &mut Tally) {
    let len = password.chars().count();
    if len >= RECOMMENDED_LENGTH {
        tally.reward(2);
    } else if len >= MIN_LENGTH {
        tally.reward(1);
    } else {
        tally.suggest(SHORT_PASSWORD);
    }
}
