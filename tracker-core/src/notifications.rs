use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Transient banners, newest first. Each one is dropped once its TTL has passed.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    ttl: Duration,
    items: VecDeque<Notification>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: VecDeque::new(),
        }
    }

    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let message = message.into();
        match severity {
            Severity::Success => tracing::info!("notify: {}", message),
            Severity::Error => tracing::warn!("notify error: {}", message),
        }

        self.items.push_front(Notification {
            message,
            severity,
            created_at: now,
        });
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        self.push_at(message, severity, Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, Severity::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, Severity::Error);
    }

    /// Drop expired notifications and return the ones still showing.
    pub fn active_at(&mut self, now: Instant) -> Vec<Notification> {
        let ttl = self.ttl;
        self.items.retain(|item| !item.is_expired(ttl, now));
        self.items.iter().cloned().collect()
    }

    pub fn active(&mut self) -> Vec<Notification> {
        self.active_at(Instant::now())
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.front()
    }
}
