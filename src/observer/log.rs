//! An observer that records every event.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::CrossingEvent;
use super::traits::CrossingObserver;

/// Records events in a shared buffer.
///
/// Clones share the buffer, so keep one clone and hand the other to the
/// engine.
///
/// ```
/// use river_crossing::core::CrossingConfig;
/// use river_crossing::game::CrossingEngine;
/// use river_crossing::observer::EventLog;
///
/// let log = EventLog::new();
/// let mut engine = CrossingEngine::new(CrossingConfig::default())
///     .unwrap()
///     .with_observer(log.clone());
///
/// assert!(engine.launch().is_err());
/// assert!(log.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<CrossingEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Copy of all recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<CrossingEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return all recorded events.
    pub fn drain(&self) -> Vec<CrossingEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl CrossingObserver for EventLog {
    fn notify(&mut self, event: &CrossingEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
