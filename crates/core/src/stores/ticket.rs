use std::sync::atomic::{AtomicU64, Ordering};

/// Position of a pending remote write in issue order.
///
/// Obtained before a request is sent and handed back with its result; the
/// result is only applied if no later-issued write has been applied already.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WriteTicket(u64);

#[derive(Debug, Default)]
pub(crate) struct WriteSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl WriteSequencer {
    pub(crate) fn issue(&self) -> WriteTicket {
        WriteTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Marks `ticket` applied unless a newer one already was.
    pub(crate) fn try_apply(&self, ticket: WriteTicket) -> bool {
        self.applied
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |applied| {
                (ticket.0 > applied).then_some(ticket.0)
            })
            .is_ok()
    }

    /// Invalidates every ticket issued so far. Used by direct writes.
    pub(crate) fn supersede_all(&self) {
        let issued = self.issued.load(Ordering::SeqCst);
        self.applied.fetch_max(issued, Ordering::SeqCst);
    }
}
