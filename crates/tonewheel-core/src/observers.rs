//! Synchronous change notification.
//!
//! Every mutable entity in the model owns an [`Observers`] list and fires it
//! after each mutation, before returning to the caller. Delivery is
//! immediate; there is no queue.

use std::fmt;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T) + Send + Sync>;

/// A list of callbacks that receive a payload of type `T`.
pub struct Observers<T> {
    callbacks: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u64,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback. Callbacks run in subscription order.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, payload: &T) {
        for (_, callback) in &mut self.callbacks {
            callback(payload);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_notify_reaches_every_subscriber_in_order() {
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut observers = Observers::<u32>::new();
        for tag in 0..3 {
            let log = Arc::clone(&log);
            observers.subscribe(move |value| log.lock().unwrap().push((tag, *value)));
        }
        observers.notify(&7);
        assert_eq!(*log.lock().unwrap(), vec![(0, 7), (1, 7), (2, 7)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut observers = Observers::<()>::new();
        let counter = Arc::clone(&hits);
        let id = observers.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        observers.notify(&());
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(observers.is_empty());
    }
}
