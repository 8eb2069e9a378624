use std::time::{Duration, Instant};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Operation or input failed.
    Error,
}

/// Message shown in the notification area.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
    /// Kept until replaced or dismissed.
    pub sticky: bool,
    /// When the message was first shown.
    pub displayed_at: Option<Instant>,
    /// Display time before expiry.
    pub duration: Duration,
}

impl Notification {
    /// Transient notification with a 5 second display time.
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            sticky: false,
            displayed_at: None,
            duration: Duration::from_secs(5),
        }
    }

    /// Sets the display time.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Keeps the notification until it is replaced or dismissed.
    #[must_use]
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Whether a transient notification has outlived its display time at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        !self.sticky
            && self
                .displayed_at
                .is_some_and(|start| now.saturating_duration_since(start) >= self.duration)
    }

    /// Records the first display time; later calls are ignored.
    pub fn mark_displayed_at(&mut self, now: Instant) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationKind::Success, "Message");
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, "Message");
        assert_eq!(n.duration, Duration::from_secs(5));
        assert!(!n.sticky);
    }

    #[test]
    fn test_notification_expiry() {
        let start = Instant::now();
        let mut n = Notification::new(NotificationKind::Error, "Message");
        n.mark_displayed_at(start);

        assert!(!n.is_expired_at(start + Duration::from_secs(4)));
        assert!(n.is_expired_at(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_sticky_never_expires() {
        let start = Instant::now();
        let mut n = Notification::new(NotificationKind::Error, "Message").sticky(true);
        n.mark_displayed_at(start);

        assert!(!n.is_expired_at(start + Duration::from_secs(3600)));
    }

    #[test]
    fn test_undisplayed_does_not_expire() {
        let n = Notification::new(NotificationKind::Success, "Message");
        assert!(!n.is_expired_at(Instant::now() + Duration::from_secs(60)));
    }
}
