//! Built-in cross-field validators.
//!
//! Every rule defers to required-field validation on empty values and
//! skips (passes) when a named target field is absent from the form, so
//! a rule configured for one form can be reused on a reduced variant of
//! it without firing spuriously.

use fieldwork_core::datetime::parse_datetime_local;
use fieldwork_core::FormElement;
use serde_json::Value;

use crate::registry::Verdict;
use crate::rules::ValidatorOptions;

const DATE_RANGE_MESSAGE: &str = "End date/time must be after start date/time";
const DATE_FORMAT_MESSAGE: &str = "Invalid date format";
const PHONE_MESSAGE: &str = "Enter a valid phone number.";
const MATCH_FIELD_MESSAGE: &str = "Fields do not match.";
const CONDITIONAL_REQUIRED_MESSAGE: &str = "This field is required.";

/// `dateRange`: the end field's datetime must be strictly after the
/// start field's. Options: `startField`, `endField`, optional `message`.
pub fn date_range(_value: &str, options: &ValidatorOptions, form: &FormElement) -> Verdict {
    let start = options.str_opt("startField").and_then(|n| form.input(n));
    let end = options.str_opt("endField").and_then(|n| form.input(n));
    let (Some(start), Some(end)) = (start, end) else {
        // Presumed not applicable to this form.
        return Verdict::pass();
    };
    if start.value.is_empty() || end.value.is_empty() {
        return Verdict::pass();
    }

    let (Some(start), Some(end)) = (
        parse_datetime_local(&start.value),
        parse_datetime_local(&end.value),
    ) else {
        return Verdict::fail(DATE_FORMAT_MESSAGE);
    };

    if end > start {
        Verdict::pass()
    } else {
        Verdict::fail(options.message_or(DATE_RANGE_MESSAGE))
    }
}

/// `phone`: after stripping non-digits, the value must hold 10 to 15
/// digits inclusive.
pub fn phone(value: &str, options: &ValidatorOptions, _form: &FormElement) -> Verdict {
    if value.is_empty() {
        return Verdict::pass();
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if (10..=15).contains(&digits) {
        Verdict::pass()
    } else {
        Verdict::fail(options.message_or(PHONE_MESSAGE))
    }
}

/// `matchField`: the value must equal the target field's current value
/// byte for byte, no normalization. Options: `field`, optional `message`.
pub fn match_field(value: &str, options: &ValidatorOptions, form: &FormElement) -> Verdict {
    let Some(target) = options.str_opt("field").and_then(|n| form.input(n)) else {
        return Verdict::pass();
    };
    if value == target.value {
        Verdict::pass()
    } else {
        Verdict::fail(options.message_or(MATCH_FIELD_MESSAGE))
    }
}

/// `conditionalRequired`: the field becomes required when the target
/// field's state equals `equals`. Checkbox targets compare checked
/// state against a boolean `equals`; other targets compare values with
/// strict equality. Options: `field`, `equals`, optional `message`.
pub fn conditional_required(
    value: &str,
    options: &ValidatorOptions,
    form: &FormElement,
) -> Verdict {
    let Some(target) = options.str_opt("field").and_then(|n| form.input(n)) else {
        return Verdict::pass();
    };
    let condition = match options.value("equals") {
        Some(Value::Bool(expected)) if target.kind.is_checkbox() => target.checked == *expected,
        Some(_) if target.kind.is_checkbox() => false,
        Some(Value::String(expected)) => target.value == *expected,
        Some(other) => target.value == other.to_string(),
        None => false,
    };
    if condition && value.trim().is_empty() {
        Verdict::fail(options.message_or(CONDITIONAL_REQUIRED_MESSAGE))
    } else {
        Verdict::pass()
    }
}
