//! Observer registry.
//!
//! The engine owns one registry and notifies every observer, in
//! registration order, as events occur. Observers run inline on the
//! caller's thread.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::event::RoundEvent;

/// Receives round events.
///
/// Implemented for closures, so a UI can subscribe with
/// `registry.register(Box::new(|event: &RoundEvent| { ... }))`.
pub trait RoundObserver {
    fn on_event(&mut self, event: &RoundEvent);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent),
{
    fn on_event(&mut self, event: &RoundEvent) {
        self(event);
    }
}

/// Shared observers: the caller keeps a handle and inspects it later.
impl<T: RoundObserver> RoundObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &RoundEvent) {
        self.borrow_mut().on_event(event);
    }
}

/// Records every event it sees.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<RoundEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log wrapped for sharing with a registry.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and return all recorded events.
    pub fn drain(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }
}

impl RoundObserver for EventLog {
    fn on_event(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}

/// Handle returned by [`ObserverRegistry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Ordered set of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn RoundObserver>)>,
    next_id: u32,
}

impl ObserverRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer. It will see every event fired after this call.
    pub fn register(&mut self, observer: Box<dyn RoundObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if the id is unknown.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Deliver an event to every observer in registration order.
    pub fn notify(&mut self, event: &RoundEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
