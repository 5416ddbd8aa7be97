//! Constraint-validation state for a single input.

/// The outcome of checking an input against its declarative constraints,
/// mirroring the platform constraint-validation API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidityState {
    /// The input is required but empty.
    pub value_missing: bool,
    /// The value does not match the input's type (email, url, ...).
    pub type_mismatch: bool,
    /// The value does not match the configured pattern.
    pub pattern_mismatch: bool,
    /// The value exceeds the maximum length.
    pub too_long: bool,
    /// The value is below the minimum length.
    pub too_short: bool,
    /// The numeric value is below the minimum.
    pub range_underflow: bool,
    /// The numeric value is above the maximum.
    pub range_overflow: bool,
    /// The value could not be interpreted at all (bad number, bad date).
    pub bad_input: bool,
    /// A custom validity message is set.
    pub custom_error: bool,
    custom_message: String,
}

impl ValidityState {
    /// Returns true when no constraint flag is raised.
    pub fn is_valid(&self) -> bool {
        !self.value_missing
            && !self.type_mismatch
            && !self.pattern_mismatch
            && !self.too_long
            && !self.too_short
            && !self.range_underflow
            && !self.range_overflow
            && !self.bad_input
            && !self.custom_error
    }

    /// Returns the message for the first raised flag, the custom message
    /// taking precedence. Empty when valid.
    pub fn validation_message(&self) -> String {
        if self.custom_error {
            return self.custom_message.clone();
        }
        if self.value_missing {
            return "Please fill out this field.".into();
        }
        if self.type_mismatch {
            return "Please enter a valid value.".into();
        }
        if self.pattern_mismatch {
            return "Please match the requested format.".into();
        }
        if self.too_long {
            return "Please shorten this text.".into();
        }
        if self.too_short {
            return "Please lengthen this text.".into();
        }
        if self.range_underflow {
            return "Value must be greater.".into();
        }
        if self.range_overflow {
            return "Value must be less.".into();
        }
        if self.bad_input {
            return "Please enter a valid value.".into();
        }
        String::new()
    }

    /// Sets the custom validity message; an empty string clears it.
    pub fn set_custom_validity(&mut self, message: &str) {
        self.custom_message = message.to_string();
        self.custom_error = !message.is_empty();
    }

    /// Returns the custom validity message, empty when none is set.
    pub fn custom_message(&self) -> &str {
        &self.custom_message
    }
}

/// The mutually exclusive style marker carried by an input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisualState {
    /// No marker; the input has not been judged since the last reset.
    #[default]
    Untouched,
    /// The input passed validation.
    Valid,
    /// The input failed validation.
    Invalid,
}
