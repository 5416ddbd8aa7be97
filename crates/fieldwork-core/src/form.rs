//! Form elements and the document that owns them.

use serde_json::{Map, Value};
use tracing::warn;

use crate::input::{Input, InputKind};

/// One form: an ordered collection of inputs plus form-level display
/// state. Duplicate input names are allowed and extract as arrays.
#[derive(Debug, Clone)]
pub struct FormElement {
    /// Form identifier.
    pub id: String,
    inputs: Vec<Input>,
    /// Raw per-form configuration attribute, parsed by the lifecycle
    /// manager.
    pub config_attr: Option<String>,
    was_validated: bool,
    submit_enabled: bool,
}

impl FormElement {
    /// Creates an empty form.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inputs: Vec::new(),
            config_attr: None,
            was_validated: false,
            submit_enabled: true,
        }
    }

    /// Adds an input.
    #[must_use]
    pub fn with(mut self, input: Input) -> Self {
        self.inputs.push(input);
        self
    }

    /// Sets the raw configuration attribute.
    #[must_use]
    pub fn config_attr(mut self, attr: impl Into<String>) -> Self {
        self.config_attr = Some(attr.into());
        self
    }

    /// Returns the first input with the given name.
    pub fn input(&self, name: &str) -> Option<&Input> {
        self.inputs.iter().find(|i| i.name == name)
    }

    /// Returns the first input with the given name, mutably.
    pub fn input_mut(&mut self, name: &str) -> Option<&mut Input> {
        self.inputs.iter_mut().find(|i| i.name == name)
    }

    /// Iterates over all inputs in document order.
    pub fn inputs(&self) -> impl Iterator<Item = &Input> {
        self.inputs.iter()
    }

    /// Iterates over all inputs mutably.
    pub fn inputs_mut(&mut self) -> impl Iterator<Item = &mut Input> {
        self.inputs.iter_mut()
    }

    /// Re-evaluates declarative constraints on every enabled input and
    /// returns the aggregate validity.
    pub fn check_validity(&mut self) -> bool {
        let mut valid = true;
        for input in &mut self.inputs {
            if input.disabled {
                continue;
            }
            if !input.check_validity() {
                valid = false;
            }
        }
        valid
    }

    /// The display-state flag revealing style markers after a failed
    /// validation pass.
    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    /// Sets the was-validated display flag.
    pub fn set_was_validated(&mut self, value: bool) {
        self.was_validated = value;
    }

    /// Whether the submit control accepts activation.
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Enables or disables the submit control.
    pub fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    /// Extracts current values into a key-to-value map. Checkboxes
    /// extract as booleans; repeated names collapse into an array while
    /// a single occurrence stays scalar. Disabled inputs are skipped.
    pub fn extract(&self) -> Map<String, Value> {
        let mut data = Map::new();
        for input in &self.inputs {
            if input.disabled {
                continue;
            }
            let value = if input.kind.is_checkbox() {
                Value::Bool(input.checked)
            } else {
                Value::String(input.value.clone())
            };
            match data.entry(input.name.clone()) {
                serde_json::map::Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                serde_json::map::Entry::Occupied(mut slot) => match slot.get_mut() {
                    Value::Array(values) => values.push(value),
                    existing => {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, value]);
                    }
                },
            }
        }
        data
    }

    /// Fills inputs from a record. Unknown keys are ignored with a
    /// diagnostic; missing keys leave the input untouched.
    pub fn populate(&mut self, record: &Map<String, Value>) {
        let form_id = self.id.clone();
        for (name, value) in record {
            let Some(input) = self.input_mut(name) else {
                warn!(form = %form_id, field = %name, "populate: no such field");
                continue;
            };
            match (input.kind, value) {
                (InputKind::Checkbox, Value::Bool(checked)) => input.checked = *checked,
                (InputKind::Checkbox, other) => input.checked = other == &Value::String("true".into()),
                (_, Value::String(s)) => input.value = s.clone(),
                (_, Value::Null) => input.value.clear(),
                (_, other) => input.value = other.to_string(),
            }
        }
    }

    /// Restores every input to its initial state and clears form-level
    /// display state.
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.reset();
        }
        self.was_validated = false;
    }
}

/// A minimal document: the set of forms the toolkit can bind to.
#[derive(Debug, Clone, Default)]
pub struct Document {
    forms: Vec<FormElement>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a form.
    pub fn add_form(&mut self, form: FormElement) {
        self.forms.push(form);
    }

    /// Looks up a form by id.
    pub fn form(&self, id: &str) -> Option<&FormElement> {
        self.forms.iter().find(|f| f.id == id)
    }

    /// Removes and returns a form by id, transferring ownership to the
    /// caller (typically a form instance binding to it).
    pub fn take_form(&mut self, id: &str) -> Option<FormElement> {
        let index = self.forms.iter().position(|f| f.id == id)?;
        Some(self.forms.remove(index))
    }
}
