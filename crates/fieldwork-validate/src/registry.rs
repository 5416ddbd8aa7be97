//! The validator registry.

use std::collections::HashMap;
use std::sync::Arc;

use fieldwork_core::FormElement;

use crate::builtin;
use crate::rules::ValidatorOptions;

/// The result of running one validator against one field.
///
/// Validation failures are values, not errors; `message` is meaningful
/// only when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the value passed.
    pub valid: bool,
    /// Human-readable failure message.
    pub message: String,
}

impl Verdict {
    /// A passing verdict.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing verdict carrying a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// A boxed validator function: `(value, options, form) -> Verdict`.
///
/// The form is passed so cross-field rules can resolve sibling fields.
pub type ValidatorFn = dyn Fn(&str, &ValidatorOptions, &FormElement) -> Verdict + Send + Sync;

/// Name-keyed registry of validator functions.
///
/// Constructed once per application context and passed by reference to
/// the runner and orchestrator. Registration is last-write-wins; lookup
/// never panics. There is no removal operation, re-registration under
/// the same name suffices for replacement.
pub struct ValidatorRegistry {
    validators: HashMap<String, Arc<ValidatorFn>>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Creates a registry pre-seeded with the built-in rules:
    /// `dateRange`, `phone`, `matchField` and `conditionalRequired`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("dateRange", builtin::date_range);
        registry.register("phone", builtin::phone);
        registry.register("matchField", builtin::match_field);
        registry.register("conditionalRequired", builtin::conditional_required);
        registry
    }

    /// Registers a validator under `name`, overwriting any previous
    /// entry with that name.
    pub fn register<F>(&mut self, name: impl Into<String>, validator: F)
    where
        F: Fn(&str, &ValidatorOptions, &FormElement) -> Verdict + Send + Sync + 'static,
    {
        self.validators.insert(name.into(), Arc::new(validator));
    }

    /// Looks up a validator by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<ValidatorFn>> {
        self.validators.get(name).cloned()
    }

    /// Returns whether a validator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ValidatorRegistry")
            .field("validators", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = ValidatorRegistry::with_builtins();
        for name in ["dateRange", "phone", "matchField", "conditionalRequired"] {
            assert!(registry.contains(name), "missing builtin {name}");
        }
    }

    #[test]
    fn test_lookup_returns_registered_fn() {
        let mut registry = ValidatorRegistry::new();
        registry.register("always", |_, _, _| Verdict::fail("always fails"));

        let form = FormElement::new("f");
        let validator = registry.lookup("always").unwrap();
        let verdict = validator("x", &ValidatorOptions::default(), &form);
        assert!(!verdict.valid);
        assert_eq!(verdict.message, "always fails");
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let registry = ValidatorRegistry::new();
        assert!(registry.lookup("nope").is_none());
    }

    #[test]
    fn test_reregistration_is_last_write_wins() {
        let mut registry = ValidatorRegistry::new();
        registry.register("rule", |_, _, _| Verdict::fail("first"));
        registry.register("rule", |_, _, _| Verdict::fail("second"));

        let form = FormElement::new("f");
        let validator = registry.lookup("rule").unwrap();
        assert_eq!(
            validator("", &ValidatorOptions::default(), &form).message,
            "second"
        );
    }
}
