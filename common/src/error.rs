use std::error::Error;

use thiserror::Error;

/// Failure raised by an observer or a topic callback while reacting.
pub type ObserverFailure = Box<dyn Error + Send + Sync>;

pub type ReactionResult = Result<(), ObserverFailure>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Observer failed to react: {0}")]
    Observer(#[source] ObserverFailure),
    #[error("Subscriber of topic {topic} failed: {source}")]
    Subscriber {
        topic: String,
        source: ObserverFailure,
    },
}
