//! Host-wide keyboard shortcuts with scoped subscriptions.
//!
//! The host owns one [`ShortcutHub`] and forwards every key press to
//! [`ShortcutHub::dispatch`]. Subscribers receive their command over a
//! channel and hold a [`Subscription`] guard; dropping the guard removes the
//! listener, so a finished session can never be triggered again.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender};

/// One key press as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key text; Shift already applied (`'Z'` vs `'z'`).
    pub key: char,
    pub ctrl: bool,
    /// Cmd on macOS, Super/Win elsewhere.
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn meta(key: char) -> Self {
        Self {
            meta: true,
            ..Self::new(key)
        }
    }
}

/// Key combination a listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyChord {
    /// `key` pressed with Ctrl or Meta held.
    Command(char),
}

impl KeyChord {
    /// Ctrl+z / Cmd+z.
    pub const UNDO: KeyChord = KeyChord::Command('z');

    pub fn matches(&self, event: &KeyEvent) -> bool {
        match *self {
            KeyChord::Command(key) => (event.ctrl || event.meta) && event.key == key,
        }
    }
}

/// Commands delivered to editor sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Undo,
}

struct Listener {
    id: u64,
    chord: KeyChord,
    command: EditorCommand,
    sender: Sender<EditorCommand>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Fan-out point for host key events.
#[derive(Clone, Default)]
pub struct ShortcutHub {
    inner: Rc<RefCell<Registry>>,
}

impl ShortcutHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `chord`; matching key presses send `command` to the returned receiver.
    pub fn subscribe(&self, chord: KeyChord, command: EditorCommand) -> (Subscription, Receiver<EditorCommand>) {
        let (sender, receiver) = mpsc::channel();
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            chord,
            command,
            sender,
        });
        log::debug!("shortcut {chord:?} subscribed as #{id}");
        let subscription = Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        };
        (subscription, receiver)
    }

    /// Deliver a key press. Returns `true` when a listener consumed it, in
    /// which case the host should suppress its default handling.
    pub fn dispatch(&self, event: &KeyEvent) -> bool {
        let mut registry = self.inner.borrow_mut();
        let mut consumed = false;
        registry.listeners.retain(|listener| {
            if !listener.chord.matches(event) {
                return true;
            }
            match listener.sender.send(listener.command) {
                Ok(()) => {
                    consumed = true;
                    true
                }
                // Receiver gone: the subscriber was dropped without unsubscribing.
                Err(_) => false,
            }
        });
        consumed
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Guard for a live listener. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Remove the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|l| l.id != self.id);
            log::debug!("shortcut #{} unsubscribed", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_chord_accepts_ctrl_and_meta_only_lowercase() {
        assert!(KeyChord::UNDO.matches(&KeyEvent::ctrl('z')));
        assert!(KeyChord::UNDO.matches(&KeyEvent::meta('z')));
        assert!(!KeyChord::UNDO.matches(&KeyEvent::new('z')));
        let shifted = KeyEvent {
            key: 'Z',
            shift: true,
            ..KeyEvent::ctrl('Z')
        };
        assert!(!KeyChord::UNDO.matches(&shifted));
    }

    #[test]
    fn dispatch_delivers_to_live_subscribers() {
        let hub = ShortcutHub::new();
        let (_sub, rx) = hub.subscribe(KeyChord::UNDO, EditorCommand::Undo);
        assert!(hub.dispatch(&KeyEvent::ctrl('z')));
        assert!(!hub.dispatch(&KeyEvent::ctrl('y')));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![EditorCommand::Undo]);
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let hub = ShortcutHub::new();
        let (sub, rx) = hub.subscribe(KeyChord::UNDO, EditorCommand::Undo);
        assert_eq!(hub.listener_count(), 1);
        sub.unsubscribe();
        assert_eq!(hub.listener_count(), 0);
        assert!(!hub.dispatch(&KeyEvent::ctrl('z')));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dead_receivers_are_pruned() {
        let hub = ShortcutHub::new();
        let (sub, rx) = hub.subscribe(KeyChord::UNDO, EditorCommand::Undo);
        drop(rx);
        assert!(!hub.dispatch(&KeyEvent::ctrl('z')));
        assert_eq!(hub.listener_count(), 0);
        drop(sub);
    }

    #[test]
    fn guard_outliving_hub_is_harmless() {
        let hub = ShortcutHub::new();
        let (sub, _rx) = hub.subscribe(KeyChord::UNDO, EditorCommand::Undo);
        drop(hub);
        drop(sub);
    }
}
