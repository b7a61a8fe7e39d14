//! # Toast Queue
//!
//! Transient notifications, stacked in arrival order and dismissed after a
//! fixed lifetime.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Toast Lifecycle                                │
//! │                                                                         │
//! │   push(kind, msg, now) ──► [#1][#2][#3] ──► prune(now) drops every     │
//! │                             ▲               toast with expires_at ≤ now │
//! │                             │                                           │
//! │                          dismiss(id) removes one early (click-close)    │
//! │                                                                         │
//! │   expires_at = created_at + lifetime (default 3 s)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::TOAST_LIFETIME_SECS;

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS modifier class.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

/// A kind and message produced by an operation, not yet queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

/// Identifies a toast for dismissal. Strictly increasing per queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(pub u64);

/// A queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Stack of live toasts.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        ToastQueue::new(Duration::seconds(TOAST_LIFETIME_SECS))
    }
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        ToastQueue {
            toasts: Vec::new(),
            next_id: 1,
            lifetime,
        }
    }

    #[inline]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Queues a toast and returns its id.
    pub fn push(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            created_at: now,
            expires_at: now + self.lifetime,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> ToastId {
        self.push(ToastKind::Success, message, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> ToastId {
        self.push(ToastKind::Error, message, now)
    }

    pub fn push_notice(&mut self, notice: Notice, now: DateTime<Utc>) -> ToastId {
        self.push(notice.kind, notice.message, now)
    }

    /// Removes one toast. Returns whether it was still queued.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drops every expired toast and returns how many went.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        before - self.toasts.len()
    }

    /// The earliest expiry among queued toasts.
    pub fn next_expiry(&self) -> Option<DateTime<Utc>> {
        self.toasts.iter().map(|t| t.expires_at).min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_ids_increase_and_order_is_kept() {
        let mut q = ToastQueue::default();
        let a = q.success("one", t0());
        let b = q.error("two", t0());
        let c = q.push(ToastKind::Info, "three", t0());
        assert!(a < b && b < c);

        let messages: Vec<_> = q.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["one", "two", "three"]);
    }

    #[test]
    fn test_toast_expires_exactly_at_lifetime() {
        let mut q = ToastQueue::default();
        q.success("saved", t0());
        assert_eq!(q.next_expiry(), Some(t0() + Duration::seconds(3)));

        assert_eq!(q.prune(t0() + Duration::milliseconds(2999)), 0);
        assert_eq!(q.len(), 1);
        assert_eq!(q.prune(t0() + Duration::seconds(3)), 1);
        assert!(q.is_empty());
        assert_eq!(q.next_expiry(), None);
    }

    #[test]
    fn test_prune_keeps_younger_toasts() {
        let mut q = ToastQueue::default();
        q.success("first", t0());
        q.success("second", t0() + Duration::seconds(2));

        assert_eq!(q.prune(t0() + Duration::seconds(3)), 1);
        assert_eq!(q.iter().next().map(|t| t.message.as_str()), Some("second"));
    }

    #[test]
    fn test_dismiss() {
        let mut q = ToastQueue::default();
        let a = q.success("a", t0());
        let b = q.success("b", t0());

        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.iter().map(|t| t.id).collect::<Vec<_>>(), [b]);
    }

    #[test]
    fn test_ids_never_reused_after_dismiss() {
        let mut q = ToastQueue::default();
        let a = q.success("a", t0());
        q.dismiss(a);
        let b = q.success("b", t0());
        assert!(b > a);
    }

    #[test]
    fn test_push_notice_keeps_kind() {
        let mut q = ToastQueue::new(Duration::seconds(10));
        q.push_notice(Notice::error("nope"), t0());
        let toast = q.iter().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.expires_at, t0() + Duration::seconds(10));
    }
}
