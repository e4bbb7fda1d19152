//! Pattern analysis sections - sequential runs and repeated characters.

use super::Tally;

pub const SEQUENTIAL_RUN: &str = "Avoid sequential characters or numbers";
pub const REPEATED_CHARACTER: &str = "Avoid repeating characters";

const SEQUENTIAL_DIGITS: &[&str] = &[
    "012", "123", "234", "345", "456", "567", "678", "789", "890",
];

// "klm" and "lmn" are not part of the list.
const SEQUENTIAL_LETTERS: &[&str] = &[
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl", "mno", "nop", "opq",
    "pqr", "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz",
];

const MAX_REPEAT: usize = 3;

/// Returns true if the password contains a known 3-character ascending run.
///
/// Digit runs are matched as-is, letter runs case-insensitively.
pub fn has_sequential_run(password: &str) -> bool {
    if SEQUENTIAL_DIGITS.iter().any(|run| password.contains(run)) {
        return true;
    }
    let lower = password.to_lowercase();
    SEQUENTIAL_LETTERS.iter().any(|run| lower.contains(run))
}

/// Returns true if any character other than a line break occurs 3+ times in a row.
pub fn has_repeated_character(password: &str) -> bool {
    let mut previous: Option<char> = None;
    let mut repeated_count = 0;
    for c in password.chars() {
        if c != '\n' && previous == Some(c) {
            repeated_count += 1;
            if repeated_count >= MAX_REPEAT {
                return true;
            }
        } else {
            repeated_count = 1;
        }
        previous = Some(c);
    }
    false
}

/// Penalizes (-1) once if any sequential run is present.
pub fn sequential_run_section(password: &str, tally: &mut Tally) {
    if has_sequential_run(password) {
        tally.penalize(1, SEQUENTIAL_RUN);
    }
}

/// Penalizes (-1) once if any character repeats 3+ times consecutively.
pub fn repeated_character_section(password: &str, tally: &mut Tally) {
    if has_repeated_character(password) {
        tally.penalize(1, REPEATED_CHARACTER);
    }
}
