//! Change-event emitter with unsubscribe-by-identity.
//!
//! Listeners are keyed by event name and delivered in registration order.
//! Emission snapshots the listener list first, so a listener that
//! unsubscribes (itself or another listener) mid-emission does not affect the
//! in-flight delivery.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use starkline_core::traits::{ChangeListener, Unsubscribe};
use starkline_core::types::ChangeEvent;

#[derive(Default)]
struct EmitterInner {
    listeners: RwLock<HashMap<String, Vec<ChangeListener>>>,
}

/// Event emitter backing the mock wallet's `events` capability.
#[derive(Clone, Default)]
pub struct ChangeEmitter {
    inner: Arc<EmitterInner>,
}

impl ChangeEmitter {
    /// Creates an emitter with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns a function removing exactly that
    /// listener instance.
    ///
    /// Removal filters by reference identity, so registering the same
    /// listener twice and unsubscribing once leaves one registration.
    pub fn on(&self, event: &str, listener: ChangeListener) -> Unsubscribe {
        self.inner
            .listeners
            .write()
            .entry(event.to_string())
            .or_default()
            .push(listener.clone());

        let weak = Arc::downgrade(&self.inner);
        let event = event.to_string();
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut map = inner.listeners.write();
                if let Some(list) = map.get_mut(&event) {
                    let mut removed = false;
                    list.retain(|existing| {
                        if !removed && Arc::ptr_eq(existing, &listener) {
                            removed = true;
                            false
                        } else {
                            true
                        }
                    });
                }
            }
        })
    }

    /// Invokes every currently registered listener for the event, in
    /// registration order.
    pub fn emit(&self, event: &str, payload: &ChangeEvent) {
        let snapshot: Vec<ChangeListener> = {
            let map = self.inner.listeners.read();
            map.get(event).cloned().unwrap_or_default()
        };
        tracing::debug!(event, listeners = snapshot.len(), "emitting wallet event");
        for listener in snapshot {
            listener(payload);
        }
    }

    /// Number of listeners registered for the event.
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner
            .listeners
            .read()
            .get(event)
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn recording_listener(log: Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> ChangeListener {
        Arc::new(move |_event: &ChangeEvent| {
            log.lock().unwrap().push(tag);
        })
    }

    #[test]
    fn test_delivers_in_registration_order() {
        let emitter = ChangeEmitter::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let _a = emitter.on("change", recording_listener(log.clone(), "a"));
        let _b = emitter.on("change", recording_listener(log.clone(), "b"));
        let _c = emitter.on("change", recording_listener(log.clone(), "c"));

        emitter.emit("change", &ChangeEvent::default());

        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_listener() {
        let emitter = ChangeEmitter::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let unsubscribe_a = emitter.on("change", recording_listener(log.clone(), "a"));
        let _b = emitter.on("change", recording_listener(log.clone(), "b"));

        unsubscribe_a();
        emitter.emit("change", &ChangeEvent::default());

        assert_eq!(*log.lock().unwrap(), vec!["b"]);
        assert_eq!(emitter.listener_count("change"), 1);
    }

    #[test]
    fn test_duplicate_registration_unsubscribes_one_instance() {
        let emitter = ChangeEmitter::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        // Same listener instance registered twice.
        let listener = recording_listener(log.clone(), "x");
        let unsubscribe_first = emitter.on("change", listener.clone());
        let _second = emitter.on("change", listener);

        unsubscribe_first();
        emitter.emit("change", &ChangeEvent::default());

        assert_eq!(*log.lock().unwrap(), vec!["x"]);
    }

    #[test]
    fn test_unsubscribe_during_emission_keeps_snapshot() {
        let emitter = ChangeEmitter::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let unsubscribe_b: Arc<Mutex<Option<Unsubscribe>>> = Arc::new(Mutex::new(None));

        // Listener "a" unsubscribes "b" while the emission is in flight;
        // "b" must still observe the current event.
        let slot = unsubscribe_b.clone();
        let log_a = log.clone();
        let _a = emitter.on(
            "change",
            Arc::new(move |_event: &ChangeEvent| {
                log_a.lock().unwrap().push("a");
                if let Some(unsubscribe) = slot.lock().unwrap().take() {
                    unsubscribe();
                }
            }),
        );
        let handle = emitter.on("change", recording_listener(log.clone(), "b"));
        *unsubscribe_b.lock().unwrap() = Some(handle);

        emitter.emit("change", &ChangeEvent::default());
        assert_eq!(*log.lock().unwrap(), vec!["a", "b"]);

        // The removal holds for the next emission.
        emitter.emit("change", &ChangeEvent::default());
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_unknown_event_is_noop() {
        let emitter = ChangeEmitter::new();
        emitter.emit("change", &ChangeEvent::default());
        assert_eq!(emitter.listener_count("change"), 0);
    }
}
