//! Password strength tier library
//!
//! This library sorts a candidate password into a coarse strength tier
//! (easy, medium, strong) from simple character-class checks. Passwords
//! shorter than the minimum length are left unclassified.
//!
//! # Features
//!
//! - `async` (default): Enables the change watcher with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_tier::{classify, StrengthCategory};
//!
//! let result = classify("abc 123 !@");
//! assert!(result.length_sufficient);
//! assert_eq!(result.category, StrengthCategory::Strong);
//!
//! assert_eq!(classify("abc123€€").category, StrengthCategory::Medium);
//! ```

// Internal modules
mod classifier;
mod config;
mod field;
mod input;
mod sections;

#[cfg(feature = "async")]
mod watch;

// Public API
pub use classifier::{Classifier, StrengthCategory, StrengthResult, classify, classify_secret};
pub use config::{ClassifierConfig, ConfigError, DEFAULT_MIN_LENGTH};
pub use field::PasswordField;
pub use input::PasswordInput;
pub use sections::{SYMBOL_ALLOW_LIST, is_allow_listed_symbol};

#[cfg(feature = "async")]
pub use watch::{
    StopReason, WatchError, WatchOptions, WatchSummary, classify_password_tx,
    watch_password_changes,
};
