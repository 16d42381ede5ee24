use common::{error::ReactionResult, subject_observer::Observer};
use dipstick::{Gauge, Input, InputScope, Log};
use observer::StateSubject;

/// Reports every state a subject goes through as a gauge on the log output.
pub struct StateGauge {
    gauge: Gauge,
}

impl StateGauge {
    pub fn new(name: &str) -> Self {
        let log_scope = Log::to_log().level(log::Level::Info).metrics();
        StateGauge {
            gauge: log_scope.gauge(name),
        }
    }
}

impl Observer<StateSubject> for StateGauge {
    fn update(&self, source: &StateSubject) -> ReactionResult {
        self.gauge.value(source.state());
        Ok(())
    }
}
