//! Transient notices: newest first, removed on dismissal or expiry.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct Notifications {
    notices: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
        now: Instant,
    ) {
        self.next_id += 1;
        let notice = Notice {
            id: self.next_id,
            message: message.into(),
            severity,
            expires_at: now + duration,
        };
        tracing::debug!("Notice {} ({:?}): {}", notice.id, severity, notice.message);
        self.notices.insert(0, notice);
    }

    /// Returns false when no such notice is showing
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    /// Drop notices whose time is up. Returns true if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.expires_at > now);
        self.notices.len() != before
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
