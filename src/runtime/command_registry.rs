//! Command-sent subscribers and identifiers.

/// Stable identifier for a command subscriber owned by a single console.
///
/// Semantics:
/// - IDs are unique within a console instance.
/// - IDs are never reused, even after the subscriber is removed.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Write handle given to subscribers while a command is delivered.
///
/// Text lands in the pending output of the line that is live at delivery time, which is the
/// line appended by the submission, never the submitted one.
pub struct CommandOutput<'a> {
    pending: &'a mut String,
}

impl<'a> CommandOutput<'a> {
    pub(crate) fn new(pending: &'a mut String) -> Self {
        Self { pending }
    }

    pub fn write(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    /// Write `text` followed by a row separator.
    pub fn write_line(&mut self, text: &str) {
        self.pending.push_str(text);
        self.pending.push('\n');
    }
}

pub type CommandHandler = Box<dyn FnMut(&str, &mut CommandOutput<'_>)>;

#[derive(Default)]
pub struct CommandSubscribers {
    entries: Vec<(SubscriptionId, CommandHandler)>,
    next_id: u64,
}

impl CommandSubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: CommandHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, handler));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `command` to every subscriber in registration order.
    pub fn notify(&mut self, command: &str, pending: &mut String) {
        for (_, handler) in self.entries.iter_mut() {
            let mut output = CommandOutput::new(pending);
            handler(command, &mut output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CommandSubscribers;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn delivers_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = CommandSubscribers::new();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            subscribers.subscribe(Box::new(move |command, _| {
                seen.borrow_mut().push(format!("{tag}:{command}"));
            }));
        }

        let mut pending = String::new();
        subscribers.notify("ls", &mut pending);
        assert_eq!(*seen.borrow(), vec!["first:ls", "second:ls"]);
    }

    #[test]
    fn subscribers_append_to_the_same_buffer() {
        let mut subscribers = CommandSubscribers::new();
        subscribers.subscribe(Box::new(|command, out| out.write_line(command)));
        subscribers.subscribe(Box::new(|_, out| out.write("done")));

        let mut pending = String::from("x");
        subscribers.notify("echo", &mut pending);
        assert_eq!(pending, "xecho\ndone");
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut subscribers = CommandSubscribers::new();
        let first = subscribers.subscribe(Box::new(|_, _| {}));
        assert!(subscribers.unsubscribe(first));
        assert!(!subscribers.unsubscribe(first));
        let second = subscribers.subscribe(Box::new(|_, _| {}));
        assert_ne!(first, second);
        assert_eq!(subscribers.len(), 1);
    }
}
