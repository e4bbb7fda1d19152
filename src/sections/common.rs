//! Common password section - exact match against the common-password set.

use std::collections::HashSet;

use super::Tally;

pub const COMMON_PASSWORD: &str = "Avoid common passwords";

/// Penalizes (-2) a password whose lowercase form is in `common`.
pub fn common_password_section(password: &str, common: &HashSet<String>, tally: &mut Tally) {
    if common.contains(&password.to_lowercase()) {
        tally.penalize(2, COMMON_PASSWORD);
    }
}
