// ── User-facing notices (toasts) ──
//
// The core never renders anything; it emits notices through a broadcast
// channel and whatever front end is attached decides how to show them.
// Inline errors are separate (a watch slot on the Catalog) because they
// persist until the next user action, while toasts auto-dismiss.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// How long a consumer should keep a toast on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// An auto-dismissing toast message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}
