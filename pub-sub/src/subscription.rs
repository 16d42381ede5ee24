use std::{fmt::Debug, hash::Hash};

use crate::{Callback, PubSub};

/// Registration returned by `PubSub::subscribe`.
pub struct Subscription<K, D> {
    topic: K,
    callback: Callback<D>,
}

impl<K, D> Subscription<K, D>
where
    K: Eq + Hash + Clone + Debug,
{
    pub(crate) fn new(topic: K, callback: Callback<D>) -> Self {
        Subscription { topic, callback }
    }

    pub fn topic(&self) -> &K {
        &self.topic
    }

    pub fn callback(&self) -> &Callback<D> {
        &self.callback
    }

    /// Unsubscribes the callback from the topic. A second call removes nothing.
    pub fn cancel(&self, bus: &mut PubSub<K, D>) -> usize {
        bus.unsubscribe(&self.topic, &self.callback)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use crate::PubSub;

    #[test]
    fn test_cancel_is_a_noop_the_second_time() {
        // Given
        let calls = Rc::new(Cell::new(0));
        let mut bus = PubSub::<String, u32>::new();
        let subscription = bus.subscribe_fn("x".to_string(), {
            let calls = calls.clone();
            move |_| {
                calls.set(calls.get() + 1);
                Ok(())
            }
        });

        // When
        let first = subscription.cancel(&mut bus);
        let second = subscription.cancel(&mut bus);

        // Then
        assert_eq!(1, first);
        assert_eq!(0, second, "Should have nothing left to remove");
        assert!(matches!(bus.publish("x", &42), Ok(false)));
        assert_eq!(0, calls.get());
        assert_eq!("x", subscription.topic());
    }

    #[test]
    fn test_cancel_keeps_other_subscribers() {
        // Given
        let mut bus = PubSub::<&'static str, u32>::new();
        let kept = bus.subscribe_fn("x", |_| Ok(()));
        let cancelled = bus.subscribe_fn("x", |_| Ok(()));

        // When
        cancelled.cancel(&mut bus);

        // Then
        assert_eq!(1, bus.subscriber_count("x"));
        assert_eq!(1, kept.cancel(&mut bus));
    }
}
