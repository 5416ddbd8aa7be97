//! Datetime-picker handles.

use serde_json::Value;
use tracing::debug;

/// An opaque resource representing one active date/time input
/// enhancement.
///
/// Handles are owned exclusively by the form instance that created
/// them and must be explicitly released; a released handle drops its
/// change wiring and stops routing events. Release is idempotent.
#[derive(Debug, Clone)]
pub struct PickerHandle {
    field: String,
    options: Value,
    active: bool,
}

impl PickerHandle {
    pub(crate) fn attach(field: impl Into<String>, options: Value) -> Self {
        let field = field.into();
        debug!(%field, "attaching datetime picker");
        Self {
            field,
            options,
            active: true,
        }
    }

    /// The field this picker enhances.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The pass-through picker options this handle was created with.
    pub fn options(&self) -> &Value {
        &self.options
    }

    /// Whether the handle still routes change events.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Releases the picker resource.
    pub fn release(&mut self) {
        if self.active {
            debug!(field = %self.field, "releasing datetime picker");
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_is_idempotent() {
        let mut picker = PickerHandle::attach("start", Value::Null);
        assert!(picker.is_active());
        picker.release();
        assert!(!picker.is_active());
        picker.release();
        assert!(!picker.is_active());
    }
}
