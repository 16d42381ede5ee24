mod bus;
mod subscription;

pub use bus::{Callback, PubSub};
pub use subscription::Subscription;
