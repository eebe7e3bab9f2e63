//! Click dispatch
//!
//! Routes host interaction events to the handler registered for a widget.
//! The host delivers every button notification through one channel
//! regardless of which subsystem created the widget, so the dispatcher is
//! the single fan-in point and must tolerate handles it has never seen.

use rustc_hash::FxHashMap;

use crate::actor::PlayerId;
use crate::handle::WidgetHandle;

/// Interaction phases delivered by the host for button widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    /// Button pressed down. Never routed to handlers.
    Press,
    /// Button released. The actionable phase.
    Release,
}

/// Handler invoked with the acting player on a button release.
pub type ClickHandler = Box<dyn Fn(PlayerId) + Send + Sync>;

/// Routing table from widget handle to click handler.
pub struct EventDispatcher {
    handlers: FxHashMap<WidgetHandle, ClickHandler>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register the click handler for a widget, replacing any previous one.
    pub fn register<F>(&mut self, handle: WidgetHandle, handler: F)
    where
        F: Fn(PlayerId) + Send + Sync + 'static,
    {
        self.register_boxed(handle, Box::new(handler));
    }

    /// Register an already-boxed click handler.
    pub fn register_boxed(&mut self, handle: WidgetHandle, handler: ClickHandler) {
        self.handlers.insert(handle, handler);
    }

    /// Remove the handler for a widget, returning whether one was present.
    ///
    /// Deleting a widget does not remove its entry automatically. The host
    /// never reuses handles, so a stale entry is inert until the caller
    /// clears it.
    pub fn unregister(&mut self, handle: WidgetHandle) -> bool {
        self.handlers.remove(&handle).is_some()
    }

    /// Route one interaction event.
    ///
    /// Press phases are filtered out without touching the registry. For a
    /// release, the registered handler (if any) is invoked with the acting
    /// player. Returns whether a handler ran; an unknown handle is a normal
    /// miss, not an error.
    pub fn dispatch(&self, player: PlayerId, handle: WidgetHandle, phase: ButtonPhase) -> bool {
        if phase != ButtonPhase::Release {
            return false;
        }
        match self.handlers.get(&handle) {
            Some(handler) => {
                handler(player);
                true
            }
            None => {
                tracing::trace!(?handle, "release on widget with no registered handler");
                false
            }
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fresh_handle() -> WidgetHandle {
        let mut widgets: SlotMap<WidgetHandle, ()> = SlotMap::with_key();
        widgets.insert(())
    }

    #[test]
    fn test_press_never_invokes() {
        let handle = fresh_handle();
        let hits = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&hits);

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(handle, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!dispatcher.dispatch(PlayerId(1), handle, ButtonPhase::Press));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_invokes_exactly_once_per_call() {
        let handle = fresh_handle();
        let hits = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&hits);

        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(handle, move |player| {
            assert_eq!(player, PlayerId(42));
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(dispatcher.dispatch(PlayerId(42), handle, ButtonPhase::Release));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(dispatcher.dispatch(PlayerId(42), handle, ButtonPhase::Release));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_miss_is_unhandled_not_an_error() {
        let dispatcher = EventDispatcher::new();
        assert!(!dispatcher.dispatch(PlayerId(1), fresh_handle(), ButtonPhase::Release));
    }

    #[test]
    fn test_register_replaces_previous_handler() {
        let handle = fresh_handle();
        let hits = Arc::new(AtomicU32::new(0));

        let mut dispatcher = EventDispatcher::new();
        let first = Arc::clone(&hits);
        dispatcher.register(handle, move |_| {
            first.fetch_add(1, Ordering::SeqCst);
        });
        let second = Arc::clone(&hits);
        dispatcher.register(handle, move |_| {
            second.fetch_add(10, Ordering::SeqCst);
        });

        dispatcher.dispatch(PlayerId(1), handle, ButtonPhase::Release);
        assert_eq!(hits.load(Ordering::SeqCst), 10);
        assert_eq!(dispatcher.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let handle = fresh_handle();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(handle, |_| {});

        assert!(dispatcher.unregister(handle));
        assert!(!dispatcher.unregister(handle));
        assert!(!dispatcher.dispatch(PlayerId(1), handle, ButtonPhase::Release));
    }
}
