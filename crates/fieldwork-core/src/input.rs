//! Input elements.

use crate::constraints::Constraints;
use crate::validity::{ValidityState, VisualState};

/// The type of an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text input.
    Text,
    /// Email input.
    Email,
    /// Telephone input.
    Tel,
    /// URL input.
    Url,
    /// Numeric input.
    Number,
    /// `datetime-local` input, the kind enhanced by a picker.
    DatetimeLocal,
    /// Checkbox, the boolean-valued kind.
    Checkbox,
    /// Select dropdown.
    Select,
    /// Multi-line text area.
    Textarea,
    /// Hidden input.
    Hidden,
}

impl InputKind {
    /// Parses a type attribute value; unknown types fall back to text.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "email" => Self::Email,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "number" => Self::Number,
            "datetime-local" => Self::DatetimeLocal,
            "checkbox" => Self::Checkbox,
            "select" => Self::Select,
            "textarea" => Self::Textarea,
            "hidden" => Self::Hidden,
            _ => Self::Text,
        }
    }

    /// Returns true for the boolean-valued kind.
    pub fn is_checkbox(self) -> bool {
        self == Self::Checkbox
    }
}

/// One form input with its constraints and validation state.
#[derive(Debug, Clone)]
pub struct Input {
    /// Field name used for lookup and extraction.
    pub name: String,
    /// Input type.
    pub kind: InputKind,
    /// Current value. Unused for checkboxes.
    pub value: String,
    /// Current checked state. Only meaningful for checkboxes.
    pub checked: bool,
    /// Initial value restored on reset.
    pub initial: String,
    /// Declarative constraints.
    pub constraints: Constraints,
    /// Constraint-validation state.
    pub validity: ValidityState,
    /// Style marker.
    pub visual: VisualState,
    /// Whether the field has seen user interaction since the last reset.
    pub touched: bool,
    /// Sibling feedback text mirrored from the custom validity message.
    pub feedback: Option<String>,
    /// Disabled inputs are skipped by validation and extraction.
    pub disabled: bool,
}

impl Input {
    /// Creates a new input of the given kind.
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            checked: false,
            initial: String::new(),
            constraints: Constraints::default(),
            validity: ValidityState::default(),
            visual: VisualState::Untouched,
            touched: false,
            feedback: None,
            disabled: false,
        }
    }

    /// Creates a text input.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, InputKind::Text)
    }

    /// Creates an email input.
    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, InputKind::Email)
    }

    /// Creates a telephone input.
    pub fn tel(name: impl Into<String>) -> Self {
        Self::new(name, InputKind::Tel)
    }

    /// Creates a `datetime-local` input.
    pub fn datetime_local(name: impl Into<String>) -> Self {
        Self::new(name, InputKind::DatetimeLocal)
    }

    /// Creates a checkbox input.
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, InputKind::Checkbox)
    }

    /// Creates a select input.
    pub fn select(name: impl Into<String>) -> Self {
        Self::new(name, InputKind::Select)
    }

    /// Makes the input required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    /// Sets the current and initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.initial = self.value.clone();
        self
    }

    /// Sets the constraints wholesale.
    #[must_use]
    pub fn constraints(mut self, constraints: Constraints) -> Self {
        // `required` may already have been set via the builder.
        let required = self.constraints.required || constraints.required;
        self.constraints = constraints;
        self.constraints.required = required;
        self
    }

    /// Disables the input.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Re-evaluates the declarative constraints, preserving any custom
    /// validity message, and returns the aggregate validity.
    pub fn check_validity(&mut self) -> bool {
        let custom = self.validity.custom_message().to_string();
        self.validity = if self.kind.is_checkbox() {
            // A required checkbox constrains checked state, not value.
            let mut validity = ValidityState::default();
            validity.value_missing = self.constraints.required && !self.checked;
            validity
        } else {
            self.constraints.check(self.kind, &self.value)
        };
        self.validity.set_custom_validity(&custom);
        self.validity.is_valid()
    }

    /// Sets or clears (empty string) the custom validity message.
    pub fn set_custom_validity(&mut self, message: &str) {
        self.validity.set_custom_validity(message);
    }

    /// Marks the input visually valid and clears any custom message and
    /// feedback text.
    pub fn mark_valid(&mut self) {
        self.visual = VisualState::Valid;
        self.validity.set_custom_validity("");
        self.feedback = None;
    }

    /// Marks the input visually invalid without touching the message,
    /// leaving the platform-derived message in place.
    pub fn mark_invalid(&mut self) {
        self.visual = VisualState::Invalid;
    }

    /// Marks the input invalid with a custom message, mirrored into the
    /// sibling feedback text.
    pub fn mark_invalid_with(&mut self, message: &str) {
        self.visual = VisualState::Invalid;
        self.validity.set_custom_validity(message);
        self.feedback = Some(message.to_string());
    }

    /// Removes the style marker without clearing touched state.
    pub fn clear_visual(&mut self) {
        self.visual = VisualState::Untouched;
    }

    /// Marks the input as having seen user interaction.
    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// Returns whether the input holds a usable value: checked for
    /// checkboxes, a non-empty selection for selects, non-whitespace
    /// content for everything else.
    pub fn is_filled(&self) -> bool {
        match self.kind {
            InputKind::Checkbox => self.checked,
            InputKind::Select => !self.value.is_empty(),
            _ => !self.value.trim().is_empty(),
        }
    }

    /// Restores the initial value and clears all validation state.
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.checked = false;
        self.validity = ValidityState::default();
        self.visual = VisualState::Untouched;
        self.touched = false;
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(InputKind::parse("datetime-local"), InputKind::DatetimeLocal);
        assert_eq!(InputKind::parse("EMAIL"), InputKind::Email);
        assert_eq!(InputKind::parse("unknown"), InputKind::Text);
    }

    #[test]
    fn test_check_validity_preserves_custom_message() {
        let mut input = Input::text("title").required();
        input.value = "hello".into();
        input.set_custom_validity("nope");
        assert!(!input.check_validity());
        assert_eq!(input.validity.validation_message(), "nope");

        input.set_custom_validity("");
        assert!(input.check_validity());
    }

    #[test]
    fn test_mark_invalid_with_sets_feedback() {
        let mut input = Input::text("title");
        input.mark_invalid_with("bad");
        assert_eq!(input.visual, VisualState::Invalid);
        assert_eq!(input.feedback.as_deref(), Some("bad"));

        input.mark_valid();
        assert_eq!(input.visual, VisualState::Valid);
        assert!(input.feedback.is_none());
        assert!(input.validity.is_valid());
    }

    #[test]
    fn test_is_filled_per_kind() {
        let mut checkbox = Input::checkbox("agree");
        assert!(!checkbox.is_filled());
        checkbox.checked = true;
        assert!(checkbox.is_filled());

        let mut select = Input::select("app");
        assert!(!select.is_filled());
        select.value = "one".into();
        assert!(select.is_filled());

        let mut text = Input::text("title");
        text.value = "   ".into();
        assert!(!text.is_filled());
        text.value = " x ".into();
        assert!(text.is_filled());
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut input = Input::text("title").value("seed");
        input.value = "edited".into();
        input.touch();
        input.mark_invalid_with("bad");

        input.reset();
        assert_eq!(input.value, "seed");
        assert!(!input.touched);
        assert_eq!(input.visual, VisualState::Untouched);
        assert!(input.validity.is_valid());
    }
}
