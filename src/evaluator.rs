//! Password scorer - main evaluation logic.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::common::{
    blacklist_path_from_env, builtin_common_passwords, load_blacklist_file, BlacklistError,
};
use crate::sections::{
    character_variety_section, common_password_section, dictionary_word_section,
    length_section, repeated_character_section, sequential_run_section, Tally,
};
use crate::types::ScoreResult;

pub const EMPTY_PASSWORD: &str = "Enter a password to check its strength";
pub const STRONG_PASSWORD: &str = "Great job! Your password is strong.";
pub const GOOD_PASSWORD: &str =
    "Good password! Consider the suggestions above to make it even stronger.";

/// Delay applied by the debounced evaluation before scoring.
#[cfg(feature = "async")]
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

static DEFAULT_SCORER: LazyLock<PasswordScorer> = LazyLock::new(PasswordScorer::new);

/// Rule-based password scorer over an immutable common-password set.
///
/// Cheap to share: wrap it in an `Arc` and call [`PasswordScorer::evaluate`]
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct PasswordScorer {
    common_passwords: HashSet<String>,
}

impl Default for PasswordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordScorer {
    /// Scorer over the built-in reference tables.
    pub fn new() -> Self {
        Self {
            common_passwords: builtin_common_passwords(),
        }
    }

    /// Scorer whose common-password set also holds the entries of `path`.
    pub fn with_blacklist_file<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let mut common_passwords = builtin_common_passwords();
        common_passwords.extend(load_blacklist_file(path)?);
        Ok(Self { common_passwords })
    }

    /// Uses `PWD_BLACKLIST_PATH` when set, the built-in tables otherwise.
    pub fn from_env() -> Result<Self, BlacklistError> {
        match blacklist_path_from_env() {
            Some(path) => Self::with_blacklist_file(path),
            None => Ok(Self::new()),
        }
    }

    /// Number of entries in the common-password set.
    pub fn common_password_count(&self) -> usize {
        self.common_passwords.len()
    }

    /// Case-insensitive membership test against the common-password set.
    pub fn is_common(&self, password: &str) -> bool {
        self.common_passwords.contains(&password.to_lowercase())
    }

    /// Scores `password` and returns its strength, score and suggestions.
    ///
    /// Never fails. An empty password short-circuits to a fixed result.
    pub fn evaluate(&self, password: &str) -> ScoreResult {
        if password.is_empty() {
            return ScoreResult::new(0, vec![EMPTY_PASSWORD.to_string()]);
        }

        let mut tally = Tally::new();
        length_section(password, &mut tally);
        character_variety_section(password, &mut tally);
        common_password_section(password, &self.common_passwords, &mut tally);
        sequential_run_section(password, &mut tally);
        repeated_character_section(password, &mut tally);
        dictionary_word_section(password, &mut tally);

        let Tally {
            score,
            mut suggestions,
        } = tally;

        if score >= 5 && suggestions.is_empty() {
            suggestions.push(STRONG_PASSWORD.to_string());
        } else if score >= 3 && suggestions.len() <= 1 {
            suggestions.push(GOOD_PASSWORD.to_string());
        }

        ScoreResult::new(score, suggestions)
    }

    /// Waits [`DEBOUNCE_DELAY`], then scores and sends the result on `tx`.
    ///
    /// Nothing is evaluated or sent if `token` is cancelled during the wait.
    #[cfg(feature = "async")]
    pub async fn evaluate_debounced(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<ScoreResult>,
    ) {
        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("evaluation cancelled before debounce elapsed");
                return;
            }
            _ = tokio::time::sleep(DEBOUNCE_DELAY) => {}
        }

        let evaluation = self.evaluate(password.expose_secret());

        if let Err(e) = tx.send(evaluation).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password evaluation result: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }
}

/// Process-wide scorer over the built-in tables, built on first use.
pub fn default_scorer() -> &'static PasswordScorer {
    &DEFAULT_SCORER
}

/// Scores `password` with the default scorer.
pub fn evaluate(password: &str) -> ScoreResult {
    default_scorer().evaluate(password)
}

/// Scores a secret password with the default scorer.
pub fn evaluate_password_strength(password: &SecretString) -> ScoreResult {
    evaluate(password.expose_secret())
}

/// Debounced evaluation with the default scorer.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    default_scorer().evaluate_debounced(password, token, tx).await;
}
