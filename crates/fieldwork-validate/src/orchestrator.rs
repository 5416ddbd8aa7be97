//! Whole-form validation.

use fieldwork_core::FormElement;

use crate::registry::ValidatorRegistry;
use crate::rules::RuleSet;
use crate::runner::run_field;

/// Validates the whole form: the declarative aggregate first, then the
/// configured validators for every listed field. Returns the combined
/// result and marks the form was-validated on failure so style markers
/// render.
///
/// A failing declarative stage does not skip the per-field stage, and a
/// failing field does not skip the remaining fields: every listed field
/// is always evaluated and has its state updated. This is the opposite
/// of the within-field short-circuit in [`run_field`], and the
/// asymmetry is intentional. Fields absent from the rule set get only
/// declarative validation; fields listed but absent from the form are
/// skipped without affecting the result.
pub fn validate_all(form: &mut FormElement, rules: &RuleSet, registry: &ValidatorRegistry) -> bool {
    let mut valid = form.check_validity();

    for (field, specs) in rules.iter() {
        if form.input(field).is_none() {
            continue;
        }
        if !run_field(form, field, specs, registry) {
            valid = false;
        }
    }

    if !valid {
        form.set_was_validated(true);
    }
    valid
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use fieldwork_core::{Input, VisualState};

    use super::*;
    use crate::registry::Verdict;
    use crate::rules::ValidatorSpec;

    #[test]
    fn test_all_fields_evaluated_after_native_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let probe = Arc::clone(&calls);
        let mut registry = ValidatorRegistry::new();
        registry.register("probe", move |_, _, _| {
            probe.fetch_add(1, Ordering::SeqCst);
            Verdict::pass()
        });

        // `missing` makes the declarative aggregate fail up front.
        let mut form = FormElement::new("f")
            .with(Input::text("missing").required())
            .with(Input::text("a").value("1"))
            .with(Input::text("b").value("2"))
            .with(Input::text("c").value("3"));

        let rules = RuleSet::new()
            .rule("a", vec![ValidatorSpec::named("probe")])
            .rule("b", vec![ValidatorSpec::named("probe")])
            .rule("c", vec![ValidatorSpec::named("probe")]);

        assert!(!validate_all(&mut form, &rules, &registry));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        for field in ["a", "b", "c"] {
            assert_eq!(form.input(field).unwrap().visual, VisualState::Valid);
        }
        assert!(form.was_validated());
    }

    #[test]
    fn test_failures_accumulate_across_fields() {
        let mut registry = ValidatorRegistry::new();
        registry.register("fails", |_, _, _| Verdict::fail("no"));
        registry.register("passes", |_, _, _| Verdict::pass());

        let mut form = FormElement::new("f")
            .with(Input::text("a").value("1"))
            .with(Input::text("b").value("2"));

        let rules = RuleSet::new()
            .rule("a", vec![ValidatorSpec::named("fails")])
            .rule("b", vec![ValidatorSpec::named("passes")]);

        assert!(!validate_all(&mut form, &rules, &registry));
        assert_eq!(form.input("a").unwrap().visual, VisualState::Invalid);
        // b was still evaluated and marked.
        assert_eq!(form.input("b").unwrap().visual, VisualState::Valid);
    }

    #[test]
    fn test_listed_but_absent_field_is_skipped() {
        let registry = ValidatorRegistry::with_builtins();
        let mut form = FormElement::new("f").with(Input::text("a").value("1"));
        let rules = RuleSet::new().rule("ghost", vec![ValidatorSpec::named("phone")]);

        assert!(validate_all(&mut form, &rules, &registry));
        assert!(!form.was_validated());
    }

    #[test]
    fn test_valid_form_is_not_marked_was_validated() {
        let registry = ValidatorRegistry::with_builtins();
        let mut form = FormElement::new("f").with(Input::tel("phone").value("123-456-7890"));
        let rules = RuleSet::new().rule("phone", vec![ValidatorSpec::named("phone")]);

        assert!(validate_all(&mut form, &rules, &registry));
        assert!(!form.was_validated());
    }

    #[test]
    fn test_cross_field_builtin_through_orchestrator() {
        let registry = ValidatorRegistry::with_builtins();
        let mut form = FormElement::new("f")
            .with(Input::datetime_local("start").value("2025-01-01T10:00"))
            .with(Input::datetime_local("end").value("2025-01-01T09:00"));

        let rules = RuleSet::new().rule(
            "end",
            vec![ValidatorSpec::configured("dateRange")
                .option("startField", "start")
                .option("endField", "end")],
        );

        assert!(!validate_all(&mut form, &rules, &registry));
        let end = form.input("end").unwrap();
        assert_eq!(end.visual, VisualState::Invalid);
        assert_eq!(
            end.validity.validation_message(),
            "End date/time must be after start date/time"
        );
    }
}
