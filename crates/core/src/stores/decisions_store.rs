use std::sync::{Arc, RwLock};

use crate::decisions::DecisionData;

use super::{read, write, StoreEvent, StoreEventBus};

/// Recently recorded purchase decisions, oldest first.
///
/// Unlike [`GoalStore`](super::GoalStore), `add_decision` never deduplicates:
/// a decision is an event log entry, and the same item may legitimately be
/// decided on more than once.
#[derive(Clone, Default)]
pub struct DecisionsStore {
    state: Arc<RwLock<Vec<DecisionData>>>,
    events: StoreEventBus,
}

impl DecisionsStore {
    pub fn new(events: StoreEventBus) -> Self {
        Self {
            state: Arc::default(),
            events,
        }
    }

    pub fn recent_decisions(&self) -> Vec<DecisionData> {
        read(&self.state).clone()
    }

    pub fn set_recent_decisions(&self, decisions: Vec<DecisionData>) {
        *write(&self.state) = decisions;
        self.events.publish(StoreEvent::DecisionsChanged);
    }

    pub fn add_decision(&self, decision: DecisionData) {
        write(&self.state).push(decision);
        self.events.publish(StoreEvent::DecisionsChanged);
    }

    pub fn clear_decisions(&self) {
        write(&self.state).clear();
        self.events.publish(StoreEvent::DecisionsChanged);
    }
}
