use crate::config::app::AppConfig;
use log::{debug, info};
use pub_sub::PubSub;
use rand::{rngs::StdRng, SeedableRng};
use scenario::{run_observer_scenario, run_pub_sub_scenario, Channel};
use strum::IntoEnumIterator;

pub use error::AppError;

mod config;
mod error;
mod gauge;
mod scenario;

fn main() -> Result<(), AppError> {
    crate::config::log::init();

    let config = AppConfig::new()?;
    debug!("Running with configuration: {:?}", config);

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let report = run_observer_scenario(&config, &mut rng)?;
    info!(
        "States {:?}: observer A reacted {} times, observer B {} times",
        report.states, report.below_three_reactions, report.zero_or_two_reactions
    );

    let mut bus = PubSub::new();
    let report = run_pub_sub_scenario(&config, &mut bus)?;
    info!(
        "Deliveries {:?}: {} greetings received",
        report.delivered, report.received
    );
    for channel in Channel::iter() {
        debug!(
            "{channel}: {} subscribers left",
            bus.subscriber_count(&channel)
        );
    }

    Ok(())
}
