use std::sync::{Arc, RwLock};

use log::debug;

use crate::goals::GoalData;

use super::{read, write, StoreEvent, StoreEventBus};

/// Ordered list of the user's goals.
#[derive(Clone, Default)]
pub struct GoalStore {
    state: Arc<RwLock<Vec<GoalData>>>,
    events: StoreEventBus,
}

impl GoalStore {
    pub fn new(events: StoreEventBus) -> Self {
        Self {
            state: Arc::default(),
            events,
        }
    }

    pub fn goals(&self) -> Vec<GoalData> {
        read(&self.state).clone()
    }

    /// The goal featured on the dashboard: the first one.
    pub fn primary_goal(&self) -> Option<GoalData> {
        read(&self.state).first().cloned()
    }

    pub fn set_goals(&self, goals: Vec<GoalData>) {
        *write(&self.state) = goals;
        self.events.publish(StoreEvent::GoalsChanged);
    }

    /// Upserts by id: replaces the first goal with the same id in place,
    /// otherwise appends.
    ///
    /// Goals without an id always append; two id-less goals never match each
    /// other, since a goal only gets an id once the backend has stored it.
    pub fn add_goal(&self, goal: GoalData) {
        {
            let mut goals = write(&self.state);
            let existing = goal
                .id
                .as_deref()
                .and_then(|id| goals.iter().position(|g| g.id.as_deref() == Some(id)));
            match existing {
                Some(index) => {
                    debug!("Replacing goal at position {}", index);
                    goals[index] = goal;
                }
                None => goals.push(goal),
            }
        }
        self.events.publish(StoreEvent::GoalsChanged);
    }

    pub fn clear_goals(&self) {
        write(&self.state).clear();
        self.events.publish(StoreEvent::GoalsChanged);
    }
}
