// ── Resource cache slot ──
//
// Holds the fetch state of one logical resource for one view:
// Idle → Loading → {Ready, Error}, re-entering Loading on key change or
// refresh. Completions carry the ticket captured at dispatch time and are
// dropped when the slot has moved on.

use futures_util::future::BoxFuture;
use tracing::debug;

use crate::error::{CoreError, ErrorKind};
use crate::key::ResourceKey;

/// Lifecycle state of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SlotStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Captured at dispatch time; a completion only lands if its ticket still
/// matches the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: ResourceKey,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> &ResourceKey {
        &self.key
    }
}

/// Outcome of handing a completion to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotUpdate {
    Applied,
    Discarded,
}

/// Fetch state for one resource key.
#[derive(Debug)]
pub struct ResourceSlot<T> {
    key: Option<ResourceKey>,
    status: SlotStatus,
    value: Option<T>,
    error: Option<CoreError>,
    /// Bumped on every transition that supersedes in-flight fetches.
    generation: u64,
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceSlot<T> {
    pub fn new() -> Self {
        Self {
            key: None,
            status: SlotStatus::Idle,
            value: None,
            error: None,
            generation: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn key(&self) -> Option<&ResourceKey> {
        self.key.as_ref()
    }

    pub fn status(&self) -> SlotStatus {
        self.status
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&CoreError> {
        self.error.as_ref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(CoreError::kind)
    }

    pub fn is_loading(&self) -> bool {
        self.status == SlotStatus::Loading
    }

    /// Already holding data for `key`: no fetch needed.
    pub fn is_usable_for(&self, key: &ResourceKey) -> bool {
        self.status == SlotStatus::Ready && self.key.as_ref() == Some(key)
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Enter `Loading` for `key`, discarding any held value.
    ///
    /// Returns `None` while a fetch for the same key is already in flight.
    pub fn begin(&mut self, key: ResourceKey) -> Option<FetchTicket> {
        if self.status == SlotStatus::Loading && self.key.as_ref() == Some(&key) {
            debug!(%key, "fetch already in flight, not dispatching another");
            return None;
        }

        if let Some(previous) = self.key.as_ref().filter(|k| **k != key) {
            debug!(from = %previous, to = %key, "slot key changed");
        }

        self.generation += 1;
        self.key = Some(key.clone());
        self.status = SlotStatus::Loading;
        self.value = None;
        self.error = None;

        Some(FetchTicket {
            key,
            generation: self.generation,
        })
    }

    /// Re-fetch the current key. `None` if the slot has no key or is
    /// already loading.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        let key = self.key.clone()?;
        self.begin(key)
    }

    /// Store a value received inline (e.g. passed along with navigation).
    /// Supersedes any in-flight fetch.
    pub fn seed(&mut self, key: ResourceKey, value: T) {
        self.generation += 1;
        self.key = Some(key);
        self.status = SlotStatus::Ready;
        self.value = Some(value);
        self.error = None;
    }

    /// Apply a fetch result if `ticket` is still current.
    pub fn complete(&mut self, ticket: &FetchTicket, result: Result<T, CoreError>) -> SlotUpdate {
        let current = self.status == SlotStatus::Loading
            && self.generation == ticket.generation
            && self.key.as_ref() == Some(&ticket.key);

        if !current {
            debug!(key = %ticket.key, "discarding superseded fetch result");
            return SlotUpdate::Discarded;
        }

        match result {
            Ok(value) => {
                self.status = SlotStatus::Ready;
                self.value = Some(value);
                self.error = None;
            }
            Err(err) => {
                debug!(key = %ticket.key, error = %err, "fetch failed");
                self.status = SlotStatus::Error;
                self.value = None;
                self.error = Some(err);
            }
        }
        SlotUpdate::Applied
    }

    /// Apply a finished [`PendingFetch`].
    pub fn apply(&mut self, completion: Completion<T>) -> SlotUpdate {
        self.complete(&completion.ticket, completion.result)
    }

    /// Drop all state, e.g. after the resource was deleted or on unmount.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.key = None;
        self.status = SlotStatus::Idle;
        self.value = None;
        self.error = None;
    }

    /// Begin loading `key` and pair the ticket with the future that will
    /// produce its value. The future is dropped unpolled if no ticket is
    /// issued.
    pub fn dispatch<F>(&mut self, key: ResourceKey, fetch: F) -> Option<PendingFetch<T>>
    where
        F: Future<Output = Result<T, CoreError>> + Send + 'static,
    {
        let ticket = self.begin(key)?;
        Some(PendingFetch {
            ticket,
            future: Box::pin(fetch),
        })
    }
}

// ── In-flight fetches ────────────────────────────────────────────────

/// A dispatched fetch: the ticket plus the future producing the value.
pub struct PendingFetch<T> {
    ticket: FetchTicket,
    future: BoxFuture<'static, Result<T, CoreError>>,
}

impl<T> std::fmt::Debug for PendingFetch<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFetch")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

impl<T> PendingFetch<T> {
    pub fn ticket(&self) -> &FetchTicket {
        &self.ticket
    }

    /// Drive the fetch to completion.
    pub async fn run(self) -> Completion<T> {
        let result = self.future.await;
        Completion {
            ticket: self.ticket,
            result,
        }
    }
}

/// A finished fetch, ready to be applied to its slot.
#[derive(Debug)]
pub struct Completion<T> {
    pub ticket: FetchTicket,
    pub result: Result<T, CoreError>,
}
