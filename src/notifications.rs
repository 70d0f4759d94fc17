//! Fire-and-forget notification seam for user-facing toasts.
//!
//! The editor reports submit outcomes through [`Notifier`]; the web layer
//! renders them as alerts, tests capture them directly.

use serde::Serialize;

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Alert CSS class the front-end uses for this severity.
    pub const fn alert_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "danger",
        }
    }
}

/// Sink for toast-style messages. Implementations must not fail.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Routes notifications to the process log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            _ => log::info!("{message}"),
        }
    }
}

/// Discards notifications, for callers that surface outcomes themselves.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}
