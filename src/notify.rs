//! Synchronous subscriber lists for the core state holders
//!
//! Both state holders ([`CurrencySelection`](crate::currency::CurrencySelection)
//! and [`ComparisonList`](crate::compare::ComparisonList)) notify their
//! subscribers through this list. Notification is synchronous and runs on the
//! thread of control that issued the mutation; the mutation is always fully
//! applied before the first listener runs. Listener invocation order is an
//! implementation detail and must not be relied upon.

/// Token returned by [`Subscribers::subscribe`]
///
/// Pass it back to [`Subscribers::unsubscribe`] to remove the listener.
/// Unsubscribing with a token that was already removed is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of listeners notified after each state mutation
pub struct Subscribers<T: ?Sized> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener, returning its unsubscribe token
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener (idempotent)
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Invoke every registered listener with the new value
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T: ?Sized> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_and_notify() {
        let mut subscribers: Subscribers<u32> = Subscribers::new();
        let seen = Rc::new(Cell::new(0u32));

        let seen_clone = Rc::clone(&seen);
        subscribers.subscribe(move |value| seen_clone.set(*value));

        subscribers.notify(&7);
        assert_eq!(seen.get(), 7);

        subscribers.notify(&11);
        assert_eq!(seen.get(), 11);
    }

    #[test]
    fn test_all_listeners_observe_notification() {
        let mut subscribers: Subscribers<u32> = Subscribers::new();
        let count = Rc::new(Cell::new(0usize));

        for _ in 0..3 {
            let count_clone = Rc::clone(&count);
            subscribers.subscribe(move |_| count_clone.set(count_clone.get() + 1));
        }

        subscribers.notify(&1);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let mut subscribers: Subscribers<u32> = Subscribers::new();
        let seen = Rc::new(Cell::new(0u32));

        let seen_clone = Rc::clone(&seen);
        let id = subscribers.subscribe(move |value| seen_clone.set(*value));
        assert_eq!(subscribers.len(), 1);

        subscribers.unsubscribe(id);
        subscribers.unsubscribe(id);
        assert!(subscribers.is_empty());

        subscribers.notify(&9);
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn test_tokens_are_not_reused() {
        let mut subscribers: Subscribers<u32> = Subscribers::new();
        let first = subscribers.subscribe(|_| {});
        subscribers.unsubscribe(first);
        let second = subscribers.subscribe(|_| {});
        assert_ne!(first, second);
    }

    #[test]
    fn test_notify_unsized_payload() {
        let mut subscribers: Subscribers<[u64]> = Subscribers::new();
        let total = Rc::new(Cell::new(0usize));

        let total_clone = Rc::clone(&total);
        subscribers.subscribe(move |ids| total_clone.set(ids.len()));

        let ids = vec![1u64, 2, 3];
        subscribers.notify(&ids);
        assert_eq!(total.get(), 3);
    }
}
