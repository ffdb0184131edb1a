//! Classifier configuration.

use thiserror::Error;

/// Minimum stripped length before a password is given a tier.
pub const DEFAULT_MIN_LENGTH: usize = 8;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum password length must be at least 1")]
    ZeroMinimumLength,
}

/// Validated classifier settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    min_length: usize,
}

impl ClassifierConfig {
    /// Builds a config with a custom minimum length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMinimumLength`] for `0`: the empty
    /// password would then pass the length gate and land in the medium tier.
    pub fn with_min_length(min_length: usize) -> Result<Self, ConfigError> {
        if min_length == 0 {
            #[cfg(feature = "tracing")]
            tracing::error!("Classifier config rejected: zero minimum length");
            return Err(ConfigError::ZeroMinimumLength);
        }
        Ok(Self { min_length })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}
