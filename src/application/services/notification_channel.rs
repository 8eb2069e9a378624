use std::time::{Duration, Instant};

use crate::domain::{Notification, NotificationKind};

/// Single-slot, auto-expiring status message.
///
/// A new notification replaces the visible one; nothing is queued.
#[derive(Debug)]
pub struct NotificationChannel {
    current: Option<Notification>,
    default_duration: Duration,
    issued: u64,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationChannel {
    /// Empty channel whose notifications last `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            current: None,
            default_duration,
            issued: 0,
        }
    }

    /// Shows `message`, replacing the current one.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>, sticky: bool) {
        self.notify_at(kind, message, sticky, Instant::now());
    }

    /// Like [`Self::notify`] with an explicit display time.
    pub fn notify_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        sticky: bool,
        now: Instant,
    ) {
        let mut notification = Notification::new(kind, message)
            .with_duration(self.default_duration)
            .sticky(sticky);
        notification.mark_displayed_at(now);
        self.current = Some(notification);
        self.issued += 1;
    }

    /// Shows a transient success message.
    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message, false);
    }

    /// Shows a transient error message.
    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message, false);
    }

    /// Hides the visible notification, if any.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Expires the current notification against the clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Drops the visible notification once its display time has elapsed.
    pub fn tick_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
        }
    }

    /// Notification on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Whether a notification is on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Number of notifications shown since creation.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_flow() {
        let mut channel = NotificationChannel::default();

        channel.success("Calculation complete.");
        assert!(channel.is_visible());

        channel.tick();
        assert_eq!(channel.current().unwrap().kind, NotificationKind::Success);
    }

    #[test]
    fn test_new_notification_replaces_current() {
        let mut channel = NotificationChannel::default();
        channel.error("First");
        channel.error("Second");

        assert_eq!(channel.current().unwrap().message, "Second");
        assert_eq!(channel.issued(), 2);
    }

    #[test]
    fn test_expiry_measured_from_display() {
        let start = Instant::now();
        let mut channel = NotificationChannel::default();
        channel.notify_at(NotificationKind::Success, "First", false, start);

        let later = start + Duration::from_secs(4);
        channel.notify_at(NotificationKind::Success, "Second", false, later);

        channel.tick_at(start + Duration::from_secs(6));
        assert_eq!(channel.current().unwrap().message, "Second");

        channel.tick_at(later + Duration::from_secs(5));
        assert!(!channel.is_visible());
    }

    #[test]
    fn test_sticky_survives_ticks() {
        let start = Instant::now();
        let mut channel = NotificationChannel::default();
        channel.notify_at(NotificationKind::Error, "Offline", true, start);

        channel.tick_at(start + Duration::from_secs(60));
        assert!(channel.is_visible());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut channel = NotificationChannel::default();
        channel.error("Oops");

        channel.dismiss();
        assert!(!channel.is_visible());
        channel.dismiss();
        assert!(!channel.is_visible());
    }
}
