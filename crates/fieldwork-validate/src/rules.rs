//! Validator configuration: which validators run for which field.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Options passed to a validator, the entry's keys minus `name`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ValidatorOptions {
    inner: Map<String, Value>,
}

impl ValidatorOptions {
    /// Returns an option as a string slice, when present and a string.
    pub fn str_opt(&self, key: &str) -> Option<&str> {
        self.inner.get(key).and_then(Value::as_str)
    }

    /// Returns an option as a bool, when present and a bool.
    pub fn bool_opt(&self, key: &str) -> Option<bool> {
        self.inner.get(key).and_then(Value::as_bool)
    }

    /// Returns the raw option value.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Returns the `message` option, falling back to the rule's default.
    pub fn message_or(&self, default: &str) -> String {
        self.str_opt("message").unwrap_or(default).to_string()
    }

    fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.inner.insert(key.into(), value.into());
    }
}

/// One entry in a field's validator list: either a bare validator name
/// or a name with options.
///
/// Deserializes from `"phone"` as well as
/// `{"name": "dateRange", "startField": "start", "endField": "end"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValidatorSpec {
    /// A bare name; the validator runs with empty options.
    Name(String),
    /// A name with validator-specific options.
    Configured {
        /// Validator name.
        name: String,
        /// Everything else in the entry.
        #[serde(flatten)]
        options: ValidatorOptions,
    },
}

impl ValidatorSpec {
    /// Creates a bare-name entry.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates an entry with an (initially empty) option set.
    pub fn configured(name: impl Into<String>) -> Self {
        Self::Configured {
            name: name.into(),
            options: ValidatorOptions::default(),
        }
    }

    /// Adds an option, converting a bare-name entry if needed.
    #[must_use]
    pub fn option(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let (name, mut options) = match self {
            Self::Name(name) => (name, ValidatorOptions::default()),
            Self::Configured { name, options } => (name, options),
        };
        options.insert(key, value);
        Self::Configured { name, options }
    }

    /// The validator name this entry refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Configured { name, .. } => name,
        }
    }

    /// The entry's options; empty for bare names.
    pub fn options(&self) -> ValidatorOptions {
        match self {
            Self::Name(_) => ValidatorOptions::default(),
            Self::Configured { options, .. } => options.clone(),
        }
    }
}

/// Ordered mapping from field name to that field's validator list.
///
/// Constructed fresh per validation call by the caller, typically from a
/// static per-form configuration. Insertion order is preserved; within
/// one field the list order decides evaluation order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<(String, Vec<ValidatorSpec>)>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and its ordered validator list.
    #[must_use]
    pub fn rule(mut self, field: impl Into<String>, specs: Vec<ValidatorSpec>) -> Self {
        self.rules.push((field.into(), specs));
        self
    }

    /// Iterates over the (field, validator list) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidatorSpec])> {
        self.rules
            .iter()
            .map(|(field, specs)| (field.as_str(), specs.as_slice()))
    }

    /// Returns whether no fields are listed.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of listed fields.
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bare_name() {
        let spec: ValidatorSpec = serde_json::from_str("\"phone\"").unwrap();
        assert_eq!(spec.name(), "phone");
        assert!(spec.options().str_opt("message").is_none());
    }

    #[test]
    fn test_deserialize_configured() {
        let spec: ValidatorSpec = serde_json::from_str(
            r#"{"name": "dateRange", "startField": "start", "endField": "end"}"#,
        )
        .unwrap();
        assert_eq!(spec.name(), "dateRange");
        assert_eq!(spec.options().str_opt("startField"), Some("start"));
        assert_eq!(spec.options().str_opt("endField"), Some("end"));
    }

    #[test]
    fn test_deserialize_mixed_list() {
        let specs: Vec<ValidatorSpec> =
            serde_json::from_str(r#"["phone", {"name": "matchField", "field": "email"}]"#).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name(), "phone");
        assert_eq!(specs[1].options().str_opt("field"), Some("email"));
    }

    #[test]
    fn test_option_builder_converts_bare_name() {
        let spec = ValidatorSpec::named("conditionalRequired")
            .option("field", "other")
            .option("equals", true);
        assert_eq!(spec.name(), "conditionalRequired");
        assert_eq!(spec.options().bool_opt("equals"), Some(true));
    }

    #[test]
    fn test_message_or() {
        let spec = ValidatorSpec::configured("phone").option("message", "Bad phone");
        assert_eq!(spec.options().message_or("default"), "Bad phone");
        assert_eq!(
            ValidatorSpec::named("phone").options().message_or("default"),
            "default"
        );
    }

    #[test]
    fn test_rule_set_preserves_order() {
        let rules = RuleSet::new()
            .rule("b", vec![ValidatorSpec::named("phone")])
            .rule("a", vec![]);
        let fields: Vec<&str> = rules.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["b", "a"]);
    }
}
