//! Password strength scoring library
//!
//! Scores a password with a fixed, rule-based pipeline and returns a
//! strength label, a numeric score and improvement suggestions.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `server`: Builds the HTTP service (`pwd-score-server` binary)
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Extra common-password file merged into the
//!   built-in set by [`PasswordScorer::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_score::{evaluate, Strength};
//!
//! let result = evaluate("Tr0ub4dor&3");
//!
//! assert_eq!(result.strength, Strength::Strong);
//! assert_eq!(result.score, 5);
//! println!("Suggestions: {:?}", result.suggestions);
//! ```

mod common;
mod evaluator;
mod sections;
mod types;

#[cfg(feature = "server")]
pub mod server;

// Public API
pub use common::{BlacklistError, BLACKLIST_PATH_ENV, COMMON_PASSWORDS, COMMON_WORDS};
pub use evaluator::{default_scorer, evaluate, evaluate_password_strength, PasswordScorer};
pub use types::{ScoreResult, Strength};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE_DELAY};
