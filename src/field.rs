//! Form-field state kept alongside the classifier.

use crate::classifier::{Classifier, StrengthResult};
use crate::input::PasswordInput;

/// State of a single password field: stripped value, touched flag and the
/// result for the current value.
///
/// The result is recomputed on every [`PasswordField::set_value`], so it
/// never describes a value other than the one held.
#[derive(Debug)]
pub struct PasswordField {
    classifier: Classifier,
    value: PasswordInput,
    touched: bool,
    result: StrengthResult,
}

impl PasswordField {
    pub fn new() -> Self {
        Self::with_classifier(Classifier::default())
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        let value = PasswordInput::default();
        let result = classifier.classify_input(&value);
        Self {
            classifier,
            value,
            touched: false,
            result,
        }
    }

    /// Replaces the value and returns its classification.
    pub fn set_value(&mut self, raw: &str) -> StrengthResult {
        self.value = PasswordInput::from_raw(raw);
        self.result = self.classifier.classify_input(&self.value);
        self.result
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// `true` if the stripped value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// `true` once the field was touched or holds a value.
    pub fn needs_highlight(&self) -> bool {
        self.touched || !self.is_empty()
    }

    pub fn result(&self) -> StrengthResult {
        self.result
    }

    /// Clears the value and the touched flag.
    pub fn reset(&mut self) {
        *self = Self::with_classifier(self.classifier);
    }
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new()
    }
}
