//! Password strength evaluation and secure password generation.
//!
//! Two stateless components share a case-insensitive blacklist of common
//! passwords:
//!
//! - [`evaluate`] maps a candidate password to a strength label, a score
//!   from 0 to [`MAX_SCORE`], and ordered improvement feedback.
//! - [`generate`] produces a random password from the OS entropy source,
//!   guaranteeing one character from each required class and never returning
//!   a blacklisted password.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate, generate, DEFAULT_LENGTH, MAX_SCORE};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate(&password);
//! println!(
//!     "Strength: {} (score {}/{})",
//!     evaluation.strength, evaluation.score, MAX_SCORE
//! );
//!
//! let generated = generate(DEFAULT_LENGTH);
//! assert_eq!(generated.expose_secret().len(), DEFAULT_LENGTH);
//! ```

// Internal modules
mod blacklist;
mod charset;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use blacklist::{BlacklistError, blacklist, is_blacklisted, load_blacklist_from_path};
pub use charset::SPECIAL_CHARS;
pub use evaluator::evaluate;
pub use generator::{DEFAULT_LENGTH, MIN_LENGTH, generate};
pub use types::{Evaluation, MAX_SCORE, Strength};
