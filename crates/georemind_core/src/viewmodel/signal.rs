//! Single-value, latest-wins observable channel.
//!
//! # Invariants
//! - A signal always holds exactly one current value.
//! - Publishing never blocks and never fails, with or without subscribers.
//! - Subscribers that fall behind observe only the newest value.

use tokio::sync::watch;

/// Observable UI-state field backed by a `tokio::sync::watch` channel.
#[derive(Debug)]
pub struct Signal<T> {
    tx: watch::Sender<T>,
}

impl<T> Signal<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replaces the current value and wakes subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Returns a receiver positioned at the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
