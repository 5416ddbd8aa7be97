//! Per-form configuration and caller-supplied hooks.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::FormsError;

/// Declarative per-form configuration, parsed from the form's
/// configuration attribute. Unknown keys are ignored; a malformed blob
/// falls back to defaults with a diagnostic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    /// Submission endpoint.
    pub action: String,
    /// HTTP verb for submission.
    pub method: String,
    /// Reset the form after a successful submission.
    pub reset_on_success: bool,
    /// Surface toast notifications for submission outcomes.
    pub show_toast: bool,
    /// Opaque pass-through configuration for the datetime-picker
    /// collaborator.
    pub flatpickr_options: Value,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "POST".to_string(),
            reset_on_success: true,
            show_toast: false,
            flatpickr_options: Value::Null,
        }
    }
}

impl FormConfig {
    /// Parses the configuration attribute. `None` and parse failures
    /// both yield defaults; a parse failure additionally logs what went
    /// wrong, since a typo in the attribute should not take the form
    /// down.
    pub fn from_attr(attr: Option<&str>) -> Self {
        let Some(raw) = attr else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                let err = FormsError::BadConfig(err.to_string());
                warn!(error = %err, "using default form configuration");
                Self::default()
            }
        }
    }
}

/// Callback invoked after a successful submission with the parsed
/// response and the submitted payload.
pub type SuccessHook = dyn Fn(&Value, &Map<String, Value>) + Send + Sync;
/// Callback invoked after a failed submission with the error message
/// and the attempted payload.
pub type ErrorHook = dyn Fn(&str, &Map<String, Value>) + Send + Sync;
/// Callback invoked on every picker change with the field name and the
/// new value.
pub type DateTimeHook = dyn Fn(&str, &str) + Send + Sync;

/// Caller-supplied lifecycle hooks, passed in at bind time.
#[derive(Clone, Default)]
pub struct FormHooks {
    pub(crate) success: Option<Arc<SuccessHook>>,
    pub(crate) error: Option<Arc<ErrorHook>>,
    pub(crate) datetime_change: Option<Arc<DateTimeHook>>,
}

impl FormHooks {
    /// Creates an empty hook set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the success hook.
    #[must_use]
    pub fn on_success<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Value, &Map<String, Value>) + Send + Sync + 'static,
    {
        self.success = Some(Arc::new(hook));
        self
    }

    /// Sets the error hook.
    #[must_use]
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &Map<String, Value>) + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(hook));
        self
    }

    /// Sets the datetime-change hook.
    #[must_use]
    pub fn on_datetime_change<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.datetime_change = Some(Arc::new(hook));
        self
    }
}

impl std::fmt::Debug for FormHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormHooks")
            .field("success", &self.success.is_some())
            .field("error", &self.error.is_some())
            .field("datetime_change", &self.datetime_change.is_some())
            .finish()
    }
}
