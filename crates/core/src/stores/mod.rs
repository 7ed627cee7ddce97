//! Client-side state holders.
//!
//! Each store is a cheap, clonable handle over shared state. Stores are never
//! global: an [`AppStores`] bundle is created by whoever owns the application
//! (or by each test) and passed down to the code that needs it. Every write
//! publishes a [`StoreEvent`] on the bundle's bus after the state changed.

mod decisions_store;
mod events;
mod goal_store;
mod savings_store;
mod ticket;
mod user_store;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;

pub use decisions_store::DecisionsStore;
pub use events::{StoreEvent, StoreEventBus};
pub use goal_store::GoalStore;
pub use savings_store::SavingsStore;
pub use ticket::WriteTicket;
pub use user_store::UserStore;

/// Default number of buffered change events per subscriber.
const EVENT_BUS_CAPACITY: usize = 64;

/// The four client stores sharing one change bus.
#[derive(Clone)]
pub struct AppStores {
    pub user: UserStore,
    pub goals: GoalStore,
    pub savings: SavingsStore,
    pub decisions: DecisionsStore,
    events: StoreEventBus,
}

impl AppStores {
    pub fn new() -> Self {
        let events = StoreEventBus::new(EVENT_BUS_CAPACITY);
        Self {
            user: UserStore::new(events.clone()),
            goals: GoalStore::new(events.clone()),
            savings: SavingsStore::new(events.clone()),
            decisions: DecisionsStore::new(events.clone()),
            events,
        }
    }

    /// Receives every change made through any of the stores from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Empties every store, as on sign-out.
    pub fn reset(&self) {
        self.user.clear_user();
        self.goals.clear_goals();
        self.savings.clear_savings();
        self.decisions.clear_decisions();
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::new()
    }
}

// A panic while holding a store lock cannot leave the value half-written
// (every write is a single assignment), so poisoning is ignored.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
