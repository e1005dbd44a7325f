use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Auto-dismiss duration for search failures and unsupported selections.
pub const TOAST_DURATION: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// A transient notification shown in the footer until its deadline passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub raised_at: DateTime<Local>,
    deadline: Instant,
}

impl Toast {
    #[must_use]
    pub fn info(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(ToastKind::Info, message, duration)
    }

    #[must_use]
    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self::new(ToastKind::Error, message, duration)
    }

    fn new(kind: ToastKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            raised_at: Local::now(),
            deadline: Instant::now() + duration,
        }
    }

    /// Checked on every tick; an expired toast is dropped from state.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_toast_expires_immediately() {
        let toast = Toast::info("gone", Duration::ZERO);
        assert!(toast.is_expired());
    }

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::error("still here", TOAST_DURATION);
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Error);
    }
}
