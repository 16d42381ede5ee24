mod policies;
mod state_subject;

pub use policies::{PolicyObserver, ReactionPolicy};
pub use state_subject::{StateSubject, MAX_STATE};
