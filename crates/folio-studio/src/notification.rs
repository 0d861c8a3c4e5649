//! Transient user notifications.

use std::time::{Duration, Instant};

use crate::settings::NotificationSettings;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A write was committed.
    Success,
    /// A write failed; the draft is kept.
    Error,
}

/// A message the host shows briefly after a commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

// =============================================================================
// NOTIFICATION CENTER
// =============================================================================

/// Holds the notification currently on screen and hides it once its
/// auto-hide delay has passed.
///
/// Hosts call [`NotificationCenter::tick`] from their timer; the center never
/// reads the clock itself.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    auto_hide: Option<Duration>,
    current: Option<Shown>,
}

#[derive(Debug, Clone)]
struct Shown {
    notification: Notification,
    hide_at: Option<Instant>,
}

impl NotificationCenter {
    pub fn new(settings: &NotificationSettings) -> Self {
        Self {
            auto_hide: settings.auto_hide(),
            current: None,
        }
    }

    /// Show `notification`, replacing any visible one.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        let hide_at = self.auto_hide.map(|delay| now + delay);
        self.current = Some(Shown {
            notification,
            hide_at,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|shown| &shown.notification)
    }

    /// When the visible notification will hide, if it hides on its own.
    pub fn hide_at(&self) -> Option<Instant> {
        self.current.as_ref().and_then(|shown| shown.hide_at)
    }

    /// Hide the notification if its delay has elapsed. Returns whether it was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .and_then(|shown| shown.hide_at)
            .is_some_and(|hide_at| now >= hide_at);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
