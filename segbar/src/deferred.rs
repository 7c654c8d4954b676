//! Next-turn message queue for the UI thread.
//!
//! A control that needs to wait for the surrounding layout to settle posts a
//! message here instead of calling back into itself later. Each message is
//! tied to a `CancelToken`; the owner cancels the token when it goes away and
//! the message is dropped unseen.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct Deferred<M> {
    token: CancelToken,
    message: M,
}

/// One-shot deferred messages, delivered on the next `drain`.
#[derive(Debug)]
pub struct RunLoop<M> {
    queue: VecDeque<Deferred<M>>,
}

impl<M> Default for RunLoop<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> RunLoop<M> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Queue `message` for the next turn. It is skipped if `token` is
    /// cancelled by then.
    pub fn post(&mut self, token: CancelToken, message: M) {
        self.queue.push_back(Deferred { token, message });
    }

    /// Take every queued message whose token is still live, in posting order.
    ///
    /// Messages posted while the caller handles the result wait for the next
    /// drain.
    pub fn drain(&mut self) -> Vec<M> {
        let pending = std::mem::take(&mut self.queue);
        let total = pending.len();
        let live: Vec<M> = pending
            .into_iter()
            .filter(|d| !d.token.is_cancelled())
            .map(|d| d.message)
            .collect();
        if live.len() != total {
            tracing::debug!(dropped = total - live.len(), "skipped cancelled deferred messages");
        }
        live
    }

    /// Number of queued messages, cancelled ones included.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
