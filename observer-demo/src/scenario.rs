use std::{cell::Cell, rc::Rc};

use common::subject_observer::Subject;
use log::info;
use observer::{PolicyObserver, ReactionPolicy, StateSubject};
use pub_sub::PubSub;
use rand::Rng;
use strum::{Display, EnumIter};

use crate::{config::app::AppConfig, gauge::StateGauge, AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Channel {
    Greetings,
    Alerts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverReport {
    pub states: Vec<u8>,
    pub below_three_reactions: usize,
    pub zero_or_two_reactions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubSubReport {
    pub delivered: Vec<(Channel, bool)>,
    pub received: usize,
}

/// Attaches two policy observers and a gauge, runs the business logic `rounds`
/// times and detaches the second observer after `detach_after` rounds.
pub fn run_observer_scenario(
    config: &AppConfig,
    rng: &mut impl Rng,
) -> Result<ObserverReport, AppError> {
    let mut subject = StateSubject::default();

    let below_three = Rc::new(PolicyObserver::new("ObserverA", ReactionPolicy::BelowThree));
    let zero_or_two = Rc::new(PolicyObserver::new(
        "ObserverB",
        ReactionPolicy::ZeroOrAtLeastTwo,
    ));
    subject.attach(below_three.clone());
    subject.attach(zero_or_two.clone());
    subject.attach(Rc::new(StateGauge::new("subject_state")));

    let mut states = Vec::with_capacity(config.rounds);
    for round in 0..config.rounds {
        if round == config.detach_after {
            subject.detach(zero_or_two.clone());
        }
        subject.some_business_logic(rng)?;
        states.push(subject.state());
    }

    Ok(ObserverReport {
        states,
        below_three_reactions: below_three.reactions(),
        zero_or_two_reactions: zero_or_two.reactions(),
    })
}

/// Publishes the greeting before and after cancelling its only subscription,
/// then on a channel nobody listens to.
pub fn run_pub_sub_scenario(
    config: &AppConfig,
    bus: &mut PubSub<Channel, String>,
) -> Result<PubSubReport, AppError> {
    let received = Rc::new(Cell::new(0));
    let subscription = bus.subscribe_fn(Channel::Greetings, {
        let received = received.clone();
        move |message: &String| {
            info!("Received greeting: {message}");
            received.set(received.get() + 1);
            Ok(())
        }
    });

    let mut delivered = vec![];
    delivered.push((
        Channel::Greetings,
        bus.publish(&Channel::Greetings, &config.greeting)?,
    ));
    subscription.cancel(bus);
    delivered.push((
        Channel::Greetings,
        bus.publish(&Channel::Greetings, &config.greeting)?,
    ));
    delivered.push((
        Channel::Alerts,
        bus.publish(&Channel::Alerts, &config.greeting)?,
    ));

    Ok(PubSubReport {
        delivered,
        received: received.get(),
    })
}
