use instant::Instant;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Style class applied to the message element.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A status line shown to the user after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

/// The single message display.
///
/// Holds the most recent message and the deadline at which it disappears.
/// Each `show` replaces the message and pushes the deadline out; an `expire`
/// scheduled for an older deadline is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageSlot {
    current: Option<Message>,
    hide_at: Option<Instant>,
}

impl MessageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` from `now` and returns the instant it should hide.
    pub fn show(&mut self, message: Message, now: Instant, timeout: Duration) -> Instant {
        let deadline = now + timeout;
        self.current = Some(message);
        self.hide_at = Some(deadline);
        deadline
    }

    /// Hides the message if `deadline` is still the active one.
    pub fn expire(&mut self, deadline: Instant) -> bool {
        if self.hide_at == Some(deadline) {
            self.hide_at = None;
            true
        } else {
            false
        }
    }

    /// The last message shown, visible or not. The element keeps its text
    /// while hidden.
    pub fn message(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some() && self.hide_at.is_some()
    }

    #[cfg(test)]
    pub fn is_visible_at(&self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) => self.current.is_some() && now < deadline,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn starts_hidden_and_empty() {
        let slot = MessageSlot::new();
        assert!(!slot.is_visible());
        assert!(slot.message().is_none());
    }

    #[test]
    fn message_hides_after_timeout() {
        let start = Instant::now();
        let mut slot = MessageSlot::new();

        let deadline = slot.show(Message::success("Signed up a@x.com"), start, TIMEOUT);

        assert_eq!(deadline, start + Duration::from_secs(5));
        assert!(slot.is_visible_at(start + Duration::from_millis(4999)));
        assert!(!slot.is_visible_at(start + Duration::from_secs(5)));

        assert!(slot.expire(deadline));
        assert!(!slot.is_visible());
        assert_eq!(slot.message().unwrap().text, "Signed up a@x.com");
    }

    #[test]
    fn newer_message_resets_hide_point() {
        let start = Instant::now();
        let mut slot = MessageSlot::new();

        let first = slot.show(Message::success("first"), start, TIMEOUT);
        let second = slot.show(
            Message::error("second"),
            start + Duration::from_secs(3),
            TIMEOUT,
        );

        assert_eq!(second, start + Duration::from_secs(8));
        assert!(slot.is_visible_at(start + Duration::from_secs(6)));
        assert!(!slot.is_visible_at(start + Duration::from_secs(8)));

        assert!(!slot.expire(first));
        assert!(slot.is_visible());
        assert_eq!(slot.message().unwrap().kind, MessageKind::Error);

        assert!(slot.expire(second));
        assert!(!slot.is_visible());
    }

    #[test]
    fn css_class_matches_kind() {
        assert_eq!(Message::success("ok").kind.css_class(), "success");
        assert_eq!(Message::error("no").kind.to_string(), "error");
    }
}
