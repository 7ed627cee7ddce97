use tokio::sync::broadcast;

/// Which store changed. Subscribers re-read the store to get the new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    UserChanged,
    GoalsChanged,
    SavingsChanged,
    DecisionsChanged,
}

/// Lightweight broadcast bus that fans store changes out to subscribers.
#[derive(Clone)]
pub struct StoreEventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl StoreEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: StoreEvent) {
        // No subscribers or lagging listeners are fine; the store is the source of truth.
        let _ = self.sender.send(event);
    }
}

impl Default for StoreEventBus {
    fn default() -> Self {
        Self::new(super::EVENT_BUS_CAPACITY)
    }
}
