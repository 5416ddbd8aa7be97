//! The form lifecycle manager.

use std::sync::Arc;

use fieldwork_core::datetime::{parse_datetime_local, to_timestamp};
use fieldwork_core::{Document, FormElement, InputKind, VisualState};
use fieldwork_validate::{validate_all, RuleSet, ValidatorRegistry};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{FormConfig, FormHooks};
use crate::error::FormsError;
use crate::notify::{Notifier, Severity, DEFAULT_TOAST_DURATION};
use crate::picker::PickerHandle;
use crate::transport::Transport;

const DATE_RANGE_MESSAGE: &str = "End date/time must be after start date/time";
const DATE_FORMAT_MESSAGE: &str = "Invalid date format";
const SUBMIT_SUCCESS_MESSAGE: &str = "Submitted successfully.";
const SUBMIT_GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Lifecycle state of one bound form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Bound and accepting events.
    Bound,
    /// A submission is in flight; the submit control is disabled and a
    /// second submit is ignored.
    Submitting,
    /// Terminal; all further events are ignored.
    Destroyed,
}

/// One form wired up with validation, pickers, submission and
/// feedback.
///
/// The instance owns its form element and its picker handles
/// exclusively. `destroy` releases the picker resources; the owner
/// must call it, nothing is released implicitly.
pub struct FormInstance {
    form: FormElement,
    config: FormConfig,
    hooks: FormHooks,
    rules: RuleSet,
    registry: Arc<ValidatorRegistry>,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    pickers: Vec<PickerHandle>,
    state: Lifecycle,
}

impl FormInstance {
    /// Binds to the form with the given id, taking it out of the
    /// document. Returns `None` with a diagnostic when the form does
    /// not exist; this is the only fatal-at-call-site condition.
    ///
    /// Binding parses the form's configuration attribute, attaches one
    /// picker per datetime-local input, and runs the completeness
    /// sweep once so the submit control starts in the right state.
    pub fn bind(
        document: &mut Document,
        form_id: &str,
        rules: RuleSet,
        hooks: FormHooks,
        registry: Arc<ValidatorRegistry>,
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
    ) -> Option<Self> {
        let Some(form) = document.take_form(form_id) else {
            warn!(error = %FormsError::FormNotFound(form_id.to_string()), "bind aborted");
            return None;
        };

        let config = FormConfig::from_attr(form.config_attr.as_deref());
        let pickers = form
            .inputs()
            .filter(|input| input.kind == InputKind::DatetimeLocal)
            .map(|input| PickerHandle::attach(&input.name, config.flatpickr_options.clone()))
            .collect();

        let mut instance = Self {
            form,
            config,
            hooks,
            rules,
            registry,
            transport,
            notifier,
            pickers,
            state: Lifecycle::Bound,
        };
        instance.refresh_required_state();
        Some(instance)
    }

    /// The current lifecycle state.
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// The bound form.
    pub fn form(&self) -> &FormElement {
        &self.form
    }

    /// The resolved configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The picker handles this instance owns.
    pub fn pickers(&self) -> &[PickerHandle] {
        &self.pickers
    }

    /// Handles a value change on an input: updates the value, marks
    /// the field touched and re-runs the completeness sweep.
    pub fn input_changed(&mut self, field: &str, value: &str) {
        if self.state == Lifecycle::Destroyed {
            return;
        }
        if let Some(input) = self.form.input_mut(field) {
            input.value = value.to_string();
            input.touch();
        }
        self.refresh_required_state();
    }

    /// Handles a checkbox toggle.
    pub fn checkbox_toggled(&mut self, field: &str, checked: bool) {
        if self.state == Lifecycle::Destroyed {
            return;
        }
        if let Some(input) = self.form.input_mut(field) {
            input.checked = checked;
            input.touch();
        }
        self.refresh_required_state();
    }

    /// Handles focus loss on an input.
    pub fn input_blurred(&mut self, field: &str) {
        if self.state == Lifecycle::Destroyed {
            return;
        }
        if let Some(input) = self.form.input_mut(field) {
            input.touch();
        }
        self.refresh_required_state();
    }

    /// Handles a change event from a picker: clears the input's custom
    /// validity, marks it touched, re-runs the sweep and invokes the
    /// datetime-change hook.
    pub fn picker_changed(&mut self, field: &str, value: &str) {
        if self.state == Lifecycle::Destroyed {
            return;
        }
        if !self
            .pickers
            .iter()
            .any(|p| p.field() == field && p.is_active())
        {
            debug!(%field, "ignoring change from released picker");
            return;
        }
        if let Some(input) = self.form.input_mut(field) {
            input.value = value.to_string();
            input.set_custom_validity("");
            input.touch();
        }
        self.refresh_required_state();
        if let Some(hook) = &self.hooks.datetime_change {
            hook(field, value);
        }
    }

    /// The completeness sweep: checks every required field for a
    /// usable value, toggles valid/invalid styling on the ones already
    /// touched, and gates the submit control on overall completeness.
    /// Styling and gating are independent: an untouched empty field
    /// disables the control without showing invalid styling yet.
    ///
    /// Returns whether all required fields are filled.
    pub fn refresh_required_state(&mut self) -> bool {
        let mut complete = true;
        for input in self.form.inputs_mut() {
            if !input.constraints.required || input.disabled {
                continue;
            }
            let filled = input.is_filled();
            if !filled {
                complete = false;
            }
            if input.touched {
                input.visual = if filled {
                    VisualState::Valid
                } else {
                    VisualState::Invalid
                };
            }
        }
        self.form.set_submit_enabled(complete);
        complete
    }

    /// Submits the form. Returns the parsed response on success and
    /// `None` on any aborted or failed path; outcomes are also
    /// surfaced through the configured notifier and hooks.
    ///
    /// The transition into `Submitting` happens only after the full
    /// native validation pass and the start/end date-range gate both
    /// succeed; nothing touches the network before that. The submit
    /// control is restored on every exit path.
    pub async fn submit(&mut self) -> Option<Value> {
        if self.state != Lifecycle::Bound {
            debug!(form = %self.form.id, state = ?self.state, "submit ignored");
            return None;
        }

        if !self.form.check_validity() {
            self.form.set_was_validated(true);
            return None;
        }

        let mut payload = self.form.extract();

        if let Some((start_name, end_name)) = self.datetime_pair() {
            let start_value = self.field_value(&start_name);
            let end_value = self.field_value(&end_name);
            if let Some(message) = date_range_gate(&start_value, &end_value) {
                if let Some(end) = self.form.input_mut(&end_name) {
                    end.touch();
                    end.mark_invalid_with(&message);
                }
                self.form.set_was_validated(true);
                if self.config.show_toast {
                    self.notifier
                        .notify(&message, Severity::Error, DEFAULT_TOAST_DURATION);
                }
                return None;
            }
            if let Some(ts) = to_timestamp(&start_value) {
                payload.insert(start_name, Value::String(ts));
            }
            if let Some(ts) = to_timestamp(&end_value) {
                payload.insert(end_name, Value::String(ts));
            }
        }

        self.state = Lifecycle::Submitting;
        self.form.set_submit_enabled(false);

        let result = self
            .transport
            .send(&self.config.action, &self.config.method, &payload)
            .await;

        // The control comes back on every exit path.
        self.form.set_submit_enabled(true);
        self.state = Lifecycle::Bound;

        match result {
            Ok(response) => {
                if self.config.show_toast {
                    self.notifier.notify(
                        SUBMIT_SUCCESS_MESSAGE,
                        Severity::Success,
                        DEFAULT_TOAST_DURATION,
                    );
                }
                if let Some(hook) = &self.hooks.success {
                    hook(&response, &payload);
                }
                if self.config.reset_on_success {
                    self.reset();
                }
                Some(response)
            }
            Err(err) => {
                let mut message = err.to_string();
                if message.is_empty() {
                    message = SUBMIT_GENERIC_ERROR.to_string();
                }
                warn!(form = %self.form.id, error = %message, "submission failed");
                if self.config.show_toast {
                    self.notifier
                        .notify(&message, Severity::Error, DEFAULT_TOAST_DURATION);
                }
                if let Some(hook) = &self.hooks.error {
                    hook(&message, &payload);
                }
                None
            }
        }
    }

    /// Runs full validation (native plus configured rules) without
    /// submitting.
    pub fn validate(&mut self) -> bool {
        if self.state == Lifecycle::Destroyed {
            return false;
        }
        validate_all(&mut self.form, &self.rules, &self.registry)
    }

    /// Resets the form: values back to initial, styling and touched
    /// markers cleared everywhere, picker values cleared, and the
    /// sweep re-run (which disables the submit control again when
    /// required fields went empty).
    pub fn reset(&mut self) {
        if self.state == Lifecycle::Destroyed {
            return;
        }
        self.form.reset();
        self.refresh_required_state();
    }

    /// Fills fields from a record, then re-runs the sweep.
    pub fn populate(&mut self, record: &Map<String, Value>) {
        if self.state == Lifecycle::Destroyed {
            return;
        }
        self.form.populate(record);
        self.refresh_required_state();
    }

    /// Releases every picker handle and enters the terminal state.
    pub fn destroy(&mut self) {
        for picker in &mut self.pickers {
            picker.release();
        }
        self.state = Lifecycle::Destroyed;
        debug!(form = %self.form.id, "destroyed");
    }

    /// The designated start/end pair: the first two datetime-local
    /// inputs in document order. Forms with fewer than two datetime
    /// inputs have no pair and skip the date-range gate.
    fn datetime_pair(&self) -> Option<(String, String)> {
        let mut names = self
            .form
            .inputs()
            .filter(|input| input.kind == InputKind::DatetimeLocal)
            .map(|input| input.name.clone());
        let start = names.next()?;
        let end = names.next()?;
        Some((start, end))
    }

    fn field_value(&self, field: &str) -> String {
        self.form
            .input(field)
            .map(|input| input.value.clone())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for FormInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormInstance")
            .field("form", &self.form.id)
            .field("state", &self.state)
            .field("pickers", &self.pickers.len())
            .finish_non_exhaustive()
    }
}

/// The submit-time date-range check, same semantics as the registered
/// `dateRange` rule but applied to the designated pair directly:
/// empty values defer to required-field validation, unparseable values
/// fail with the format message, and the end must be strictly after
/// the start.
fn date_range_gate(start: &str, end: &str) -> Option<String> {
    if start.is_empty() || end.is_empty() {
        return None;
    }
    let (Some(start), Some(end)) = (parse_datetime_local(start), parse_datetime_local(end)) else {
        return Some(DATE_FORMAT_MESSAGE.to_string());
    };
    (end <= start).then(|| DATE_RANGE_MESSAGE.to_string())
}
