use crate::model::{Message, MessageSlot};
use gloo::timers::callback::Timeout;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Drives a [`MessageSlot`] with a single outstanding hide timer.
///
/// Showing a message replaces the pending [`Timeout`]; dropping the old
/// handle cancels it.
#[derive(Clone)]
pub struct MessageTimer {
    slot: Rc<RefCell<MessageSlot>>,
    pending: Rc<RefCell<Option<Timeout>>>,
    timeout: Duration,
}

impl MessageTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            slot: Rc::new(RefCell::new(MessageSlot::new())),
            pending: Rc::new(RefCell::new(None)),
            timeout,
        }
    }

    /// Shows `message` and calls `on_hidden` once it expires, unless a newer
    /// message has replaced it by then.
    pub fn show<F>(&self, message: Message, on_hidden: F)
    where
        F: FnOnce() + 'static,
    {
        let deadline = self
            .slot
            .borrow_mut()
            .show(message, Instant::now(), self.timeout);

        let slot = self.slot.clone();
        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            if slot.borrow_mut().expire(deadline) {
                on_hidden();
            }
        });
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn slot(&self) -> MessageSlot {
        self.slot.borrow().clone()
    }
}
