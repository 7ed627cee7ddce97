//! Request lifetimes tied to the screen that started them.
//!
//! A [`RequestScope`] belongs to whatever front-end context initiates calls.
//! Dropping it (or calling [`RequestScope::cancel`]) aborts every in-flight
//! request started from one of its [`RequestContext`]s and prevents their
//! results from being written into a store.

use std::future::Future;

use log::debug;
use tokio_util::sync::CancellationToken;

use spendzen_core::errors::{Error, Result};

/// Owner of a cancellation token; cancels it on drop.
#[derive(Debug, Default)]
pub struct RequestScope {
    token: CancellationToken,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context for one request issued from this scope.
    pub fn context(&self) -> RequestContext {
        RequestContext {
            token: self.token.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Handle passed into every service call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    token: CancellationToken,
}

impl RequestContext {
    /// A context no scope can cancel, for one-shot callers such as the CLI.
    pub fn detached() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drives `fut` unless the scope ends first.
    pub async fn run<T, F>(&self, operation: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("[Backend] {} cancelled before completion", operation);
                Err(Error::Cancelled(operation.to_string()))
            }
            result = fut => result,
        }
    }

    /// Fails if the scope ended; checked right before writing into a store.
    pub fn ensure_active(&self, operation: &str) -> Result<()> {
        if self.is_cancelled() {
            debug!("[Backend] {} finished after its scope ended", operation);
            return Err(Error::Cancelled(operation.to_string()));
        }
        Ok(())
    }
}
