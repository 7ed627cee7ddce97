use std::sync::{Arc, RwLock};

use log::debug;

use crate::users::UserData;

use super::ticket::{WriteSequencer, WriteTicket};
use super::{read, write, StoreEvent, StoreEventBus};

/// Holds the signed-in user, replaced wholesale on every write.
#[derive(Clone, Default)]
pub struct UserStore {
    state: Arc<RwLock<Option<UserData>>>,
    sequencer: Arc<WriteSequencer>,
    events: StoreEventBus,
}

impl UserStore {
    pub fn new(events: StoreEventBus) -> Self {
        Self {
            state: Arc::default(),
            sequencer: Arc::default(),
            events,
        }
    }

    pub fn user(&self) -> Option<UserData> {
        read(&self.state).clone()
    }

    /// Backend id of the current user, if any.
    pub fn user_id(&self) -> Option<String> {
        read(&self.state).as_ref().map(|u| u.id.clone())
    }

    pub fn set_user(&self, user: UserData) {
        {
            let mut state = write(&self.state);
            self.sequencer.supersede_all();
            *state = Some(user);
        }
        self.events.publish(StoreEvent::UserChanged);
    }

    pub fn clear_user(&self) {
        {
            let mut state = write(&self.state);
            self.sequencer.supersede_all();
            *state = None;
        }
        self.events.publish(StoreEvent::UserChanged);
    }

    /// Reserves a slot for a remote write that has not been sent yet.
    pub fn issue_ticket(&self) -> WriteTicket {
        self.sequencer.issue()
    }

    /// Stores `user` unless a write issued after `ticket` already landed.
    ///
    /// Returns whether the store changed.
    pub fn apply_ticketed(&self, ticket: WriteTicket, user: UserData) -> bool {
        {
            let mut state = write(&self.state);
            if !self.sequencer.try_apply(ticket) {
                debug!("Discarding superseded user write {:?}", ticket);
                return false;
            }
            *state = Some(user);
        }
        self.events.publish(StoreEvent::UserChanged);
        true
    }
}
