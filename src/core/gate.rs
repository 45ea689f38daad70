//! Run-once gate for requests that may be activated repeatedly.
//!
//! A view that re-activates on every refresh should still issue its request
//! only once per subscription. [`SingleFireGate`] remembers that it has
//! started and publishes the request's [`Outcome`] into a `watch` slot that
//! any number of observers can follow. [`GateSet`] keeps one gate per
//! subscription key.
//!
//! Gates are meant for a single-threaded executor: activations interleave at
//! await points but never run in parallel.

use crate::core::{DomainError, Outcome};
use std::cell::Cell;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;
use tokio::sync::watch;

pub type OutcomeSlot<V> = watch::Sender<Outcome<V, DomainError>>;
pub type OutcomeWatch<V> = watch::Receiver<Outcome<V, DomainError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The request was issued by this activation.
    Fired,
    /// An earlier activation already issued it; nothing happened.
    AlreadyStarted,
}

#[derive(Debug)]
pub struct SingleFireGate<V> {
    started: Cell<bool>,
    slot: OutcomeSlot<V>,
}

impl<V> SingleFireGate<V> {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(Outcome::pending());
        Self::with_slot(slot)
    }

    /// Publishes into a slot owned by the caller. The slot is reset to
    /// pending right away, whatever it held before.
    pub fn with_slot(slot: OutcomeSlot<V>) -> Self {
        slot.send_replace(Outcome::pending());
        Self {
            started: Cell::new(false),
            slot,
        }
    }

    pub fn subscribe(&self) -> OutcomeWatch<V> {
        self.slot.subscribe()
    }

    pub fn is_started(&self) -> bool {
        self.started.get()
    }

    pub fn current(&self) -> Outcome<V, DomainError>
    where
        V: Clone,
    {
        self.slot.borrow().clone()
    }

    /// Issues `request` if this gate has never fired, otherwise does nothing.
    ///
    /// The gate is claimed when `activate` is called, not when the returned
    /// future is first polled, so a second activation made while the first
    /// request is still in flight resolves to [`Activation::AlreadyStarted`]
    /// immediately. The first activation sets the slot to pending, awaits the
    /// request and replaces pending with the terminal outcome. Later calls
    /// neither build the request nor touch the slot.
    ///
    /// # Panics
    ///
    /// The returned future panics if the request resolves to
    /// [`Outcome::Pending`]. A request must settle as a success or a failure.
    pub fn activate<'a, F, Fut>(&'a self, request: F) -> impl Future<Output = Activation> + 'a
    where
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = Outcome<V, DomainError>> + 'a,
    {
        let fire = self.claim();
        self.settle(fire, request)
    }

    fn claim(&self) -> bool {
        if self.started.replace(true) {
            tracing::debug!("⏭️ Request already started, ignoring activation");
            return false;
        }

        self.slot.send_replace(Outcome::pending());
        tracing::debug!("🚀 Issuing single-fire request");
        true
    }

    async fn settle<F, Fut>(&self, fire: bool, request: F) -> Activation
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<V, DomainError>>,
    {
        if !fire {
            return Activation::AlreadyStarted;
        }

        match request().await {
            Outcome::Pending => {
                panic!("single-fire request resolved without a terminal outcome")
            }
            terminal => {
                tracing::debug!(
                    "✅ Single-fire request settled (success: {})",
                    terminal.is_success()
                );
                self.slot.send_replace(terminal);
            }
        }

        Activation::Fired
    }
}

impl<V> Default for SingleFireGate<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Gates keyed by subscription identity.
///
/// Each key's gate is shared out as an `Rc`, so requests for different keys
/// can be in flight together and the set stays usable while they run.
#[derive(Debug)]
pub struct GateSet<K, V> {
    gates: HashMap<K, Rc<SingleFireGate<V>>>,
}

impl<K: Eq + Hash, V> GateSet<K, V> {
    pub fn new() -> Self {
        Self {
            gates: HashMap::new(),
        }
    }

    pub fn gate(&mut self, key: K) -> Rc<SingleFireGate<V>> {
        Rc::clone(self.gates.entry(key).or_default())
    }

    pub fn subscribe(&mut self, key: K) -> OutcomeWatch<V> {
        self.gate(key).subscribe()
    }

    /// Claims the gate for `key` immediately; the returned future does not
    /// borrow the set.
    pub fn activate<F, Fut>(&mut self, key: K, request: F) -> impl Future<Output = Activation>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<V, DomainError>>,
    {
        let gate = self.gate(key);
        let fire = gate.claim();
        async move { gate.settle(fire, request).await }
    }

    /// Ends the subscription for `key`. A later activation starts afresh;
    /// a request already in flight still publishes to its old observers.
    pub fn release(&mut self, key: &K) -> bool {
        self.gates.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for GateSet<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
