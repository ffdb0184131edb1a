//! Password strength classifier - main classification logic.

use std::fmt;

use secrecy::SecretString;

use crate::config::ClassifierConfig;
use crate::input::PasswordInput;
use crate::sections::{all_classes_section, length_section, single_class_section};

/// Coarse strength tier of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthCategory {
    /// Drawn from a single character class.
    Easy,
    /// Mixed classes, but missing a letter, a digit or an allow-listed symbol.
    Medium,
    /// Letters, digits and allow-listed symbols.
    Strong,
    /// Too short to be given a tier.
    Unclassified,
}

impl StrengthCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthCategory::Easy => "easy",
            StrengthCategory::Medium => "medium",
            StrengthCategory::Strong => "strong",
            StrengthCategory::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrengthResult {
    pub length_sufficient: bool,
    pub category: StrengthCategory,
    pub is_empty: bool,
}

impl StrengthResult {
    pub fn is_easy(&self) -> bool {
        self.category == StrengthCategory::Easy
    }

    pub fn is_medium(&self) -> bool {
        self.category == StrengthCategory::Medium
    }

    pub fn is_strong(&self) -> bool {
        self.category == StrengthCategory::Strong
    }
}

/// Stateless classifier. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies a raw password. Whitespace is stripped first.
    pub fn classify(&self, raw: &str) -> StrengthResult {
        self.classify_input(&PasswordInput::from_raw(raw))
    }

    pub fn classify_secret(&self, raw: &SecretString) -> StrengthResult {
        self.classify_input(&PasswordInput::from_secret(raw))
    }

    /// Classifies an already stripped password.
    pub fn classify_input(&self, password: &PasswordInput) -> StrengthResult {
        let length_sufficient = length_section(password, self.config.min_length());

        let category = if !length_sufficient {
            StrengthCategory::Unclassified
        } else if single_class_section(password) {
            StrengthCategory::Easy
        } else if all_classes_section(password) {
            StrengthCategory::Strong
        } else {
            StrengthCategory::Medium
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(len = password.len(), %category, "password classified");

        StrengthResult {
            length_sufficient,
            category,
            is_empty: password.is_empty(),
        }
    }
}

/// Classifies `raw` with the default configuration.
///
/// # Returns
/// A [`StrengthResult`]; this never fails for any input.
pub fn classify(raw: &str) -> StrengthResult {
    Classifier::default().classify(raw)
}

/// Like [`classify`] for a value held as a [`SecretString`].
pub fn classify_secret(raw: &SecretString) -> StrengthResult {
    Classifier::default().classify_secret(raw)
}
