use std::time::{Duration, Instant};

pub const STATUS_TIMEOUT: Duration = Duration::from_secs(2);

/// Transient status-line message that clears itself after a timeout.
///
/// Setting a new message replaces the current one and restarts the timer.
#[derive(Debug)]
pub struct StatusMessage {
    current: Option<(String, Instant)>,
    timeout: Duration,
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::new(STATUS_TIMEOUT)
    }
}

impl StatusMessage {
    pub fn new(timeout: Duration) -> Self {
        Self {
            current: None,
            timeout,
        }
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.set_at(message, Instant::now());
    }

    pub fn set_at(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some((message.into(), now));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Drops the message once its timeout has passed. Returns true if a
    /// message was dropped.
    pub fn prune(&mut self) -> bool {
        self.prune_at(Instant::now())
    }

    pub fn prune_at(&mut self, now: Instant) -> bool {
        if let Some((_, since)) = &self.current
            && now.saturating_duration_since(*since) >= self.timeout
        {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_expires_after_timeout() {
        let start = Instant::now();
        let mut status = StatusMessage::default();
        status.set_at("Text copied to clipboard!", start);

        assert!(!status.prune_at(start + Duration::from_millis(1999)));
        assert_eq!(status.text(), Some("Text copied to clipboard!"));
        assert!(status.prune_at(start + STATUS_TIMEOUT));
        assert_eq!(status.text(), None);
    }

    #[test]
    fn new_message_restarts_timer() {
        let start = Instant::now();
        let mut status = StatusMessage::default();
        status.set_at("first", start);
        status.set_at("second", start + Duration::from_millis(1500));

        assert!(!status.prune_at(start + Duration::from_millis(2500)));
        assert_eq!(status.text(), Some("second"));
        assert!(status.prune_at(start + Duration::from_millis(3500)));
    }

    #[test]
    fn prune_without_message_is_noop() {
        let mut status = StatusMessage::new(Duration::from_secs(1));
        assert!(!status.prune());
        status.set("x");
        status.clear();
        assert!(!status.is_active());
    }
}
