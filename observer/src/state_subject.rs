use common::{
    error::DispatchError,
    subject_observer::{Attachment, Detachment, Observers, SharedObserver, Subject},
};
use log::info;
use rand::Rng;

/// Upper bound (inclusive) of the state drawn by the business logic.
pub const MAX_STATE: u8 = 10;

#[derive(Default)]
pub struct StateSubject {
    state: u8,
    observers: Observers<Self>,
}

impl Subject for StateSubject {
    fn attach(&mut self, observer: SharedObserver<Self>) -> Attachment {
        self.observers.attach(observer)
    }

    fn detach(&mut self, observer: SharedObserver<Self>) -> Detachment {
        self.observers.detach(observer)
    }

    fn notify(&self) -> Result<(), DispatchError> {
        info!("Notifying observers...");
        self.observers.notify(self)
    }
}

impl StateSubject {
    pub fn state(&self) -> u8 {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_state(&mut self, state: u8) -> Result<(), DispatchError> {
        self.state = state;
        info!("State has just changed to: {state}");
        self.notify()
    }

    /// Draws a new state in `0..=MAX_STATE`, then notifies every observer.
    pub fn some_business_logic(&mut self, rng: &mut impl Rng) -> Result<(), DispatchError> {
        info!("Doing something important");
        self.set_state(rng.gen_range(0..=MAX_STATE))
    }
}
