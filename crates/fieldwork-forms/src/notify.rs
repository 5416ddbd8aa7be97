//! The notification collaborator contract.

use std::time::Duration;

use tracing::{error, info, warn};

/// How long a toast stays up when the caller does not care.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
    /// Something is off but not fatal.
    Warning,
    /// Neutral information.
    Info,
}

/// Renders a transient, auto-dismissing notification.
///
/// The message must be treated as inert text regardless of content; no
/// markup interpretation.
pub trait Notifier: Send + Sync {
    /// Shows `message` at the given severity for `duration`.
    fn notify(&self, message: &str, severity: Severity, duration: Duration);
}

/// Notifier that routes messages through the tracing subscriber,
/// useful where no rendering surface exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity, _duration: Duration) {
        match severity {
            Severity::Success | Severity::Info => info!(toast = %message),
            Severity::Warning => warn!(toast = %message),
            Severity::Error => error!(toast = %message),
        }
    }
}
