use std::sync::{Arc, RwLock};

use crate::savings::SavingsData;

use super::{read, write, StoreEvent, StoreEventBus};

#[derive(Clone, Default)]
pub struct SavingsStore {
    state: Arc<RwLock<SavingsData>>,
    events: StoreEventBus,
}

impl SavingsStore {
    pub fn new(events: StoreEventBus) -> Self {
        Self {
            state: Arc::default(),
            events,
        }
    }

    pub fn savings(&self) -> SavingsData {
        *read(&self.state)
    }

    pub fn total_savings(&self) -> f64 {
        read(&self.state).total_savings
    }

    pub fn set_total_savings(&self, amount: f64) {
        write(&self.state).total_savings = amount;
        self.events.publish(StoreEvent::SavingsChanged);
    }

    pub fn clear_savings(&self) {
        *write(&self.state) = SavingsData::default();
        self.events.publish(StoreEvent::SavingsChanged);
    }
}
