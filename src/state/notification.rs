//! Transient notifications shown as a toast overlay

use std::time::{Duration, Instant};

/// A notification that dismisses itself after `duration`
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    /// How long a notification stays on screen by default
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

    pub fn new(message: impl Into<String>) -> Self {
        Self::with_duration(message, Self::DEFAULT_DURATION)
    }

    pub fn with_duration(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_not_expired() {
        let note = Notification::new("Registration successful!");
        assert!(!note.is_expired());
        assert_eq!(note.message, "Registration successful!");
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let note = Notification::with_duration("gone", Duration::ZERO);
        assert!(note.is_expired());
    }
}
