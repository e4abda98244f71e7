//! # Notifications
//!
//! Transient toasts queued by state operations and drawn by the TUI.
//! They expire after a fixed time-to-live; the queue keeps at most
//! `MAX_NOTIFICATIONS` entries, dropping the oldest first.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const MAX_NOTIFICATIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub raised_at: Instant,
}

#[derive(Debug, Default)]
pub struct Notifications {
    items: VecDeque<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.push_at(severity, message, Instant::now());
    }

    pub fn push_at(&mut self, severity: Severity, message: impl Into<String>, now: Instant) {
        self.next_id += 1;
        self.items.push_back(Notification {
            id: self.next_id,
            severity,
            message: message.into(),
            raised_at: now,
        });
        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
    }

    /// Drop every notification older than `ttl` at `now`. Returns true if any were removed.
    pub fn expire(&mut self, now: Instant, ttl: Duration) -> bool {
        let before = self.items.len();
        self.items
            .retain(|n| now.saturating_duration_since(n.raised_at) < ttl);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|n| n.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_removes_old_entries() {
        let start = Instant::now();
        let mut queue = Notifications::default();
        queue.push_at(Severity::Info, "old", start);
        queue.push_at(Severity::Error, "new", start + Duration::from_secs(3));

        let removed = queue.expire(start + Duration::from_secs(4), Duration::from_secs(4));

        assert!(removed);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().unwrap().message, "new");
        assert!(queue.has_errors());
    }

    #[test]
    fn test_queue_is_capped() {
        let mut queue = Notifications::default();
        for i in 0..(MAX_NOTIFICATIONS + 2) {
            queue.push(Severity::Info, format!("toast {i}"));
        }
        assert_eq!(queue.len(), MAX_NOTIFICATIONS);
        assert_eq!(queue.iter().next().unwrap().message, "toast 2");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = Notifications::default();
        queue.push(Severity::Info, "a");
        queue.push(Severity::Info, "b");
        let ids: Vec<_> = queue.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
