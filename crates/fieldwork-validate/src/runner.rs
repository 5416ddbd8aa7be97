//! Per-field validator runner.

use fieldwork_core::FormElement;
use tracing::warn;

use crate::registry::ValidatorRegistry;
use crate::rules::ValidatorSpec;

/// Runs the declarative constraint tier and then the configured
/// validators for one field, updating that field's visual and validity
/// state. Returns whether the field is valid.
///
/// The declarative tier runs first; when it fails the platform-derived
/// message stands and no custom validator is attempted. Custom
/// validators run in list order and short-circuit on the first failure.
/// Unregistered validator names are skipped with a diagnostic and do
/// not count as failures. Side effects are confined to the one field.
pub fn run_field(
    form: &mut FormElement,
    field: &str,
    specs: &[ValidatorSpec],
    registry: &ValidatorRegistry,
) -> bool {
    if form.input(field).is_none() {
        warn!(form = %form.id, %field, "run_field: no such field");
        return true;
    }

    let value = {
        let Some(input) = form.input_mut(field) else {
            return true;
        };
        // A stale custom message must not mask the declarative tier.
        input.set_custom_validity("");
        if !input.check_validity() {
            input.mark_invalid();
            return false;
        }
        input.value.clone()
    };

    let mut failure: Option<String> = None;
    for spec in specs {
        let Some(validator) = registry.lookup(spec.name()) else {
            warn!(%field, validator = %spec.name(), "skipping unregistered validator");
            continue;
        };
        let verdict = validator(&value, &spec.options(), form);
        if !verdict.valid {
            failure = Some(verdict.message);
            break;
        }
    }

    // The field was looked up above, so this cannot miss.
    let Some(input) = form.input_mut(field) else {
        return true;
    };
    match failure {
        Some(message) => {
            input.mark_invalid_with(&message);
            false
        }
        None => {
            input.mark_valid();
            true
        }
    }
}
