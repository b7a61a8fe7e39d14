//! # Toast State
//!
//! The app-wide toast queue, shared through a Yew context.
//!
//! ```text
//! Services page ──Push(notice, now)──┐
//!                                    ▼
//!                         ┌────────────────────┐
//!                         │    ToastState      │◄── Dismiss(id) (click)
//!                         │    (ToastQueue)    │◄── Prune(now)  (timer at next_expiry)
//!                         └─────────┬──────────┘
//!                                   ▼
//!                            ToastContainer renders the stack
//! ```

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use signex_core::{Notice, ToastId, ToastQueue};
use tracing::debug;
use yew::{Reducible, UseReducerHandle};

/// Handle components use to read and push toasts.
pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub queue: ToastQueue,
}

impl ToastState {
    pub fn new(lifetime: Duration) -> Self {
        ToastState {
            queue: ToastQueue::new(lifetime),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Push(Notice, DateTime<Utc>),
    Dismiss(ToastId),
    Prune(DateTime<Utc>),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice, now) => {
                let id = next.queue.push_notice(notice, now);
                debug!(id = id.0, "Toast queued");
            }
            ToastAction::Dismiss(id) => {
                if !next.queue.dismiss(id) {
                    return self;
                }
            }
            ToastAction::Prune(now) => {
                if next.queue.prune(now) == 0 {
                    return self;
                }
            }
        }
        Rc::new(next)
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
    fn test_push_and_prune() {
        let s = Rc::new(ToastState::default())
            .reduce(ToastAction::Push(Notice::success("one"), t0()))
            .reduce(ToastAction::Push(Notice::success("two"), t0() + Duration::seconds(1)));
        assert_eq!(s.queue.len(), 2);

        let s = s.reduce(ToastAction::Prune(t0() + Duration::seconds(3)));
        assert_eq!(s.queue.len(), 1);
    }

    #[test]
    fn test_noop_actions_keep_same_state() {
        let s = Rc::new(ToastState::default());
        let pruned = s.clone().reduce(ToastAction::Prune(t0()));
        assert!(Rc::ptr_eq(&s, &pruned));

        let dismissed = s.clone().reduce(ToastAction::Dismiss(ToastId(42)));
        assert!(Rc::ptr_eq(&s, &dismissed));
    }
}
