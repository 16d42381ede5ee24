use std::cell::Cell;

use common::{error::ReactionResult, subject_observer::Observer};
use log::info;
use strum::{Display, EnumIter};

use crate::StateSubject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ReactionPolicy {
    #[strum(to_string = "state < 3")]
    BelowThree,
    #[strum(to_string = "state == 0 || state >= 2")]
    ZeroOrAtLeastTwo,
}

impl ReactionPolicy {
    pub fn accepts(self, state: u8) -> bool {
        match self {
            ReactionPolicy::BelowThree => state < 3,
            ReactionPolicy::ZeroOrAtLeastTwo => state == 0 || state >= 2,
        }
    }
}

/// Observer reacting to a `StateSubject` whenever its policy accepts the state.
pub struct PolicyObserver {
    name: String,
    policy: ReactionPolicy,
    reactions: Cell<usize>,
}

impl PolicyObserver {
    pub fn new(name: impl Into<String>, policy: ReactionPolicy) -> Self {
        PolicyObserver {
            name: name.into(),
            policy,
            reactions: Cell::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> ReactionPolicy {
        self.policy
    }

    pub fn reactions(&self) -> usize {
        self.reactions.get()
    }
}

impl Observer<StateSubject> for PolicyObserver {
    fn update(&self, source: &StateSubject) -> ReactionResult {
        if self.policy.accepts(source.state()) {
            info!("{}: Reacted to the event ({})", self.name, self.policy);
            self.reactions.set(self.reactions.get() + 1);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::Subject;
    use strum::IntoEnumIterator;

    use super::{PolicyObserver, ReactionPolicy};
    use crate::{StateSubject, MAX_STATE};

    fn attached_pair(subject: &mut StateSubject) -> (Rc<PolicyObserver>, Rc<PolicyObserver>) {
        let below_three = Rc::new(PolicyObserver::new("A", ReactionPolicy::BelowThree));
        let zero_or_two = Rc::new(PolicyObserver::new("B", ReactionPolicy::ZeroOrAtLeastTwo));
        subject.attach(below_three.clone());
        subject.attach(zero_or_two.clone());
        (below_three, zero_or_two)
    }

    #[test]
    fn test_accepts() {
        let accepted = |policy: ReactionPolicy| {
            (0..=MAX_STATE)
                .filter(|&state| policy.accepts(state))
                .collect::<Vec<_>>()
        };

        assert_eq!(vec![0, 1, 2], accepted(ReactionPolicy::BelowThree));
        assert_eq!(
            vec![0, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            accepted(ReactionPolicy::ZeroOrAtLeastTwo)
        );
        assert!(
            ReactionPolicy::iter().all(|policy| policy.accepts(0)),
            "Every policy should react to a zero state"
        );
    }

    #[test]
    fn test_both_react_when_state_is_two() {
        // Given
        let mut subject = StateSubject::default();
        let (below_three, zero_or_two) = attached_pair(&mut subject);

        // When
        subject.set_state(2).unwrap();

        // Then
        assert_eq!(1, below_three.reactions());
        assert_eq!(1, zero_or_two.reactions());
    }

    #[test]
    fn test_only_below_three_reacts_when_state_is_one() {
        // Given
        let mut subject = StateSubject::default();
        let (below_three, zero_or_two) = attached_pair(&mut subject);

        // When
        subject.set_state(1).unwrap();

        // Then
        assert_eq!(1, below_three.reactions());
        assert_eq!(0, zero_or_two.reactions(), "Should ignore a state of 1");
    }

    #[test]
    fn test_detached_observer_stops_reacting() {
        // Given
        let mut subject = StateSubject::default();
        let (below_three, zero_or_two) = attached_pair(&mut subject);
        subject.set_state(0).unwrap();

        // When
        subject.detach(zero_or_two.clone());
        subject.set_state(0).unwrap();

        // Then
        assert_eq!(2, below_three.reactions());
        assert_eq!(1, zero_or_two.reactions());
    }

    #[test]
    fn test_observer_shared_between_subjects() {
        // Given
        let observer = Rc::new(PolicyObserver::new("shared", ReactionPolicy::BelowThree));
        let mut first = StateSubject::default();
        let mut second = StateSubject::default();
        first.attach(observer.clone());
        second.attach(observer.clone());

        // When
        first.set_state(1).unwrap();
        second.set_state(2).unwrap();

        // Then
        assert_eq!(2, observer.reactions());
        assert_eq!("shared", observer.name());
        assert_eq!(ReactionPolicy::BelowThree, observer.policy());
    }

    #[test]
    fn test_policy_display() {
        assert_eq!("state < 3", ReactionPolicy::BelowThree.to_string());
    }
}
