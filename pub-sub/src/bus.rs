use std::{borrow::Borrow, collections::HashMap, fmt::Debug, hash::Hash, rc::Rc};

use common::error::{DispatchError, ReactionResult};
use log::{debug, trace};

use crate::Subscription;

pub type Callback<D> = Rc<dyn Fn(&D) -> ReactionResult>;

/// Topic-keyed registry of callbacks.
///
/// Callbacks are compared by reference: subscribing the same `Callback` twice
/// registers it twice, and `unsubscribe` removes every registration of it.
/// Topics are created on first subscription and kept, even once emptied.
pub struct PubSub<K, D> {
    subscribers: HashMap<K, Vec<Callback<D>>>,
}

impl<K, D> Default for PubSub<K, D> {
    fn default() -> Self {
        PubSub {
            subscribers: HashMap::new(),
        }
    }
}

impl<K, D> PubSub<K, D>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, topic: K, callback: Callback<D>) -> Subscription<K, D> {
        let callbacks = self.subscribers.entry(topic.clone()).or_default();
        callbacks.push(callback.clone());
        debug!("Subscribed to {:?} ({} subscribers)", topic, callbacks.len());
        Subscription::new(topic, callback)
    }

    pub fn subscribe_fn<F>(&mut self, topic: K, callback: F) -> Subscription<K, D>
    where
        F: Fn(&D) -> ReactionResult + 'static,
    {
        self.subscribe(topic, Rc::new(callback))
    }

    /// Removes every registration of `callback` for `topic` and returns how many were removed.
    ///
    /// Unknown topics are left untouched.
    pub fn unsubscribe<Q>(&mut self, topic: &Q, callback: &Callback<D>) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some(callbacks) = self.subscribers.get_mut(topic) else {
            debug!("Nothing to unsubscribe from {:?}", topic);
            return 0;
        };

        let before = callbacks.len();
        callbacks.retain(|cb| !Rc::ptr_eq(cb, callback));
        let removed = before - callbacks.len();
        debug!("Unsubscribed {} callbacks from {:?}", removed, topic);
        removed
    }

    /// Calls every callback of `topic` in subscription order.
    ///
    /// Returns `Ok(false)` when nobody listens to the topic. The first failing
    /// callback stops the delivery.
    pub fn publish<Q>(&self, topic: &Q, data: &D) -> Result<bool, DispatchError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let callbacks = match self.subscribers.get(topic) {
            Some(callbacks) if !callbacks.is_empty() => callbacks,
            _ => {
                trace!("No subscriber for {:?}", topic);
                return Ok(false);
            }
        };

        trace!("Publishing to {} subscribers of {:?}", callbacks.len(), topic);
        for callback in callbacks {
            callback(data).map_err(|source| DispatchError::Subscriber {
                topic: format!("{topic:?}"),
                source,
            })?;
        }
        Ok(true)
    }

    pub fn subscriber_count<Q>(&self, topic: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.subscribers.get(topic).map_or(0, Vec::len)
    }

    pub fn topics(&self) -> impl Iterator<Item = &K> {
        self.subscribers.keys()
    }
}
