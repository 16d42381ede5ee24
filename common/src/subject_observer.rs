use std::rc::Rc;

use log::{info, trace};

use crate::error::{DispatchError, ReactionResult};

pub trait Observer<S: ?Sized> {
    fn update(&self, source: &S) -> ReactionResult;
}

pub type SharedObserver<S> = Rc<dyn Observer<S>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    Attached,
    AlreadyAttached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detachment {
    Detached,
    Nonexistent,
}

pub trait Subject {
    fn attach(&mut self, observer: SharedObserver<Self>) -> Attachment;
    fn detach(&mut self, observer: SharedObserver<Self>) -> Detachment;
    fn notify(&self) -> Result<(), DispatchError>;
}

/// Ordered set of observers, compared by reference.
///
/// Subjects own one of these and delegate their `Subject` implementation to it.
pub struct Observers<S: ?Sized> {
    observers: Vec<SharedObserver<S>>,
}

impl<S: ?Sized> Default for Observers<S> {
    fn default() -> Self {
        Self { observers: vec![] }
    }
}

impl<S: ?Sized> Observers<S> {
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn contains(&self, observer: &SharedObserver<S>) -> bool {
        self.observers.iter().any(|obs| Rc::ptr_eq(obs, observer))
    }

    pub fn attach(&mut self, observer: SharedObserver<S>) -> Attachment {
        if self.contains(&observer) {
            info!("Observer has been attached already");
            return Attachment::AlreadyAttached;
        }

        self.observers.push(observer);
        info!("Attached an observer");
        Attachment::Attached
    }

    pub fn detach(&mut self, observer: SharedObserver<S>) -> Detachment {
        match self
            .observers
            .iter()
            .position(|obs| Rc::ptr_eq(obs, &observer))
        {
            Some(index) => {
                self.observers.remove(index);
                info!("Detached an observer");
                Detachment::Detached
            }
            None => {
                info!("Nonexistent observer");
                Detachment::Nonexistent
            }
        }
    }

    /// Runs every observer in attachment order; the first failure stops the delivery.
    pub fn notify(&self, source: &S) -> Result<(), DispatchError> {
        trace!("Notifying {} observers", self.observers.len());
        for obs in &self.observers {
            obs.update(source).map_err(DispatchError::Observer)?;
        }
        Ok(())
    }
}
