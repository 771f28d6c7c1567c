//! Banners shown in the compose surface.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::types::ProviderKey;

/// How long a selector-error banner stays up before auto-hiding.
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    /// Provider the banner is about, if any.
    pub source: Option<ProviderKey>,
    pub body: String,
    expires_at: Instant,
}

impl Notification {
    pub fn new(
        level: NotificationLevel,
        source: Option<ProviderKey>,
        body: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            level,
            source,
            body: body.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    /// A provider could not find its input surface.
    pub fn selector_error(source: ProviderKey, body: impl Into<String>, ttl: Duration) -> Self {
        Self::new(NotificationLevel::Error, Some(source), body, ttl)
    }

    /// Time left before the banner hides; zero once expired.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Banner text, e.g. `[gemini] Input element not found`.
    pub fn banner_text(&self) -> String {
        match self.source {
            Some(source) => format!("[{source}] {}", self.body),
            None => self.body.clone(),
        }
    }
}

/// Live banners, oldest first, bounded to `capacity`.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Add a banner. When full, the oldest live one gives way.
    pub fn push(&mut self, notification: Notification) {
        self.prune();
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Banners that have not expired yet.
    pub fn visible(&mut self) -> Vec<&Notification> {
        self.prune();
        self.items.iter().collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn prune(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(16)
    }
}
