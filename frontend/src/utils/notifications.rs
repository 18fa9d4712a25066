use std::rc::Rc;
use yew::prelude::*;

use crate::config::{BOOKING_DISMISS_MS, SUCCESS_DISMISS_MS};

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationKind {
    /// Contact form went through.
    Success,
    /// A plan CTA pre-selected a plan in the contact form.
    Booking { title: String, price: String },
}

impl NotificationKind {
    pub fn auto_dismiss_ms(&self) -> u32 {
        match self {
            NotificationKind::Success => SUCCESS_DISMISS_MS,
            NotificationKind::Booking { .. } => BOOKING_DISMISS_MS,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success-notification",
            NotificationKind::Booking { .. } => "booking-notification",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Shown,
    /// Playing the exit animation; removed when it ends.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub phase: ToastPhase,
}

pub enum NotificationAction {
    Push(NotificationKind),
    /// Starts the exit animation. Repeated dismissals are no-ops.
    Dismiss(u32),
    /// Drops the toast from the page. Removing an unknown id is a no-op.
    Remove(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u32,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

impl Reducible for NotificationQueue {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotificationAction::Push(kind) => {
                log::debug!("Showing notification {} ({})", next.next_id, kind.class());
                next.items.push(Notification { id: next.next_id, kind, phase: ToastPhase::Shown });
                next.next_id = next.next_id.wrapping_add(1);
            }
            NotificationAction::Dismiss(id) => {
                match next.items.iter_mut().find(|n| n.id == id && n.phase == ToastPhase::Shown) {
                    Some(item) => item.phase = ToastPhase::Leaving,
                    None => return self,
                }
            }
            NotificationAction::Remove(id) => {
                if !self.items.iter().any(|n| n.id == id) {
                    return self;
                }
                next.items.retain(|n| n.id != id);
            }
        }
        Rc::new(next)
    }
}

pub type NotificationContext = UseReducerHandle<NotificationQueue>;

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> NotificationKind {
        NotificationKind::Booking { title: "Yoga Flow".to_string(), price: "1299".to_string() }
    }

    #[test]
    fn push_assigns_distinct_ids() {
        let queue = Rc::new(NotificationQueue::default())
            .reduce(NotificationAction::Push(NotificationKind::Success))
            .reduce(NotificationAction::Push(booking()));
        let ids: Vec<u32> = queue.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert!(queue.items().iter().all(|n| n.phase == ToastPhase::Shown));
    }

    #[test]
    fn dismiss_then_remove() {
        let queue = Rc::new(NotificationQueue::default())
            .reduce(NotificationAction::Push(NotificationKind::Success))
            .reduce(NotificationAction::Dismiss(0));
        assert_eq!(queue.items()[0].phase, ToastPhase::Leaving);
        let queue = queue.reduce(NotificationAction::Remove(0));
        assert!(queue.items().is_empty());
    }

    #[test]
    fn manual_and_timed_dismiss_race_is_harmless() {
        let queue = Rc::new(NotificationQueue::default())
            .reduce(NotificationAction::Push(booking()))
            .reduce(NotificationAction::Dismiss(0));
        let again = queue.clone().reduce(NotificationAction::Dismiss(0));
        assert!(Rc::ptr_eq(&queue, &again));

        let removed = queue.reduce(NotificationAction::Remove(0));
        let removed_twice = removed.clone().reduce(NotificationAction::Remove(0));
        assert!(Rc::ptr_eq(&removed, &removed_twice));
        assert!(removed_twice.items().is_empty());
    }

    #[test]
    fn removing_one_keeps_the_others() {
        let queue = Rc::new(NotificationQueue::default())
            .reduce(NotificationAction::Push(NotificationKind::Success))
            .reduce(NotificationAction::Push(booking()))
            .reduce(NotificationAction::Remove(0));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].kind, booking());
    }

    #[test]
    fn dismiss_delays_follow_kind() {
        assert_eq!(NotificationKind::Success.auto_dismiss_ms(), 5_000);
        assert_eq!(booking().auto_dismiss_ms(), 8_000);
    }
}
