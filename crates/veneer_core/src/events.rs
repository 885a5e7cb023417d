//! Event dispatch
//!
//! Listeners are keyed by `(target, event type)` and carry a caller-defined
//! action payload instead of a closure. Registration hands back a
//! [`ListenerId`] so a binding can be disposed of explicitly, and dispatch
//! returns the matched actions for the driving loop to interpret. This keeps
//! the dispatcher free of shared mutable captures and makes bindings
//! observable from tests.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::NodeId;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const CLICK: EventType = 8;
    pub const SCROLL: EventType = 30;
}

/// An input event aimed at a page element
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
    pub data: EventData,
    pub propagation_stopped: bool,
    pub default_prevented: bool,
}

/// Event-specific data
#[derive(Clone, Debug, Default)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
    },
    #[default]
    None,
}

impl Event {
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            data: EventData::None,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// A pointer event carrying page-absolute coordinates
    pub fn pointer(event_type: EventType, target: NodeId, x: f32, y: f32) -> Self {
        Self {
            data: EventData::Pointer { x, y },
            ..Self::new(event_type, target)
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(event_types::CLICK, target)
    }

    /// Pointer coordinates, if this event carries any
    pub fn pointer_position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y } => Some((x, y)),
            EventData::None => None,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

slotmap::new_key_type! {
    /// Disposal handle for a registered listener
    pub struct ListenerId;
}

struct ListenerEntry<A> {
    target: NodeId,
    event_type: EventType,
    action: A,
}

/// Dispatches events to registered listeners
pub struct EventDispatcher<A> {
    listeners: SlotMap<ListenerId, ListenerEntry<A>>,
    index: FxHashMap<(NodeId, EventType), SmallVec<[ListenerId; 2]>>,
}

impl<A: Clone> EventDispatcher<A> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            index: FxHashMap::default(),
        }
    }

    /// Register an action for a target and event type
    pub fn register(&mut self, target: NodeId, event_type: EventType, action: A) -> ListenerId {
        let id = self.listeners.insert(ListenerEntry {
            target,
            event_type,
            action,
        });
        self.index.entry((target, event_type)).or_default().push(id);
        id
    }

    /// Remove a listener by its handle. Returns false if it was already gone.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let Some(entry) = self.listeners.remove(id) else {
            return false;
        };
        if let Some(ids) = self.index.get_mut(&(entry.target, entry.event_type)) {
            ids.retain(|candidate| *candidate != id);
            if ids.is_empty() {
                self.index.remove(&(entry.target, entry.event_type));
            }
        }
        true
    }

    /// Number of listeners bound for a target and event type
    pub fn listener_count(&self, target: NodeId, event_type: EventType) -> usize {
        self.index
            .get(&(target, event_type))
            .map_or(0, |ids| ids.len())
    }

    /// Collect the actions bound at `node` for this event, in registration
    /// order. The caller decides what each action does; a stopped event
    /// yields nothing.
    pub fn actions_for(&self, node: NodeId, event: &Event) -> SmallVec<[A; 2]> {
        if event.propagation_stopped {
            return SmallVec::new();
        }
        let mut actions = SmallVec::new();
        if let Some(ids) = self.index.get(&(node, event.event_type)) {
            for id in ids {
                if let Some(entry) = self.listeners.get(*id) {
                    actions.push(entry.action.clone());
                }
            }
        }
        actions
    }

    /// Actions bound at the event's own target
    pub fn dispatch(&self, event: &Event) -> SmallVec<[A; 2]> {
        self.actions_for(event.target, event)
    }
}

impl<A: Clone> Default for EventDispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn node_ids(count: usize) -> Vec<NodeId> {
        let mut arena: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..count).map(|_| arena.insert(())).collect()
    }

    #[test]
    fn dispatch_returns_actions_in_registration_order() {
        let nodes = node_ids(1);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(nodes[0], event_types::CLICK, "first");
        dispatcher.register(nodes[0], event_types::CLICK, "second");

        let event = Event::click(nodes[0]);
        let actions = dispatcher.dispatch(&event);
        assert_eq!(actions.as_slice(), ["first", "second"]);
    }

    #[test]
    fn listeners_are_scoped_to_target_and_type() {
        let nodes = node_ids(2);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(nodes[0], event_types::CLICK, "click-a");
        dispatcher.register(nodes[1], event_types::POINTER_DOWN, "press-b");

        assert!(dispatcher.dispatch(&Event::click(nodes[1])).is_empty());
        assert_eq!(dispatcher.listener_count(nodes[0], event_types::CLICK), 1);
        assert_eq!(
            dispatcher.listener_count(nodes[1], event_types::POINTER_DOWN),
            1
        );
    }

    #[test]
    fn unregister_disposes_binding() {
        let nodes = node_ids(1);
        let mut dispatcher = EventDispatcher::new();
        let id = dispatcher.register(nodes[0], event_types::CLICK, ());
        assert!(dispatcher.unregister(id));
        assert!(!dispatcher.unregister(id));
        assert_eq!(dispatcher.listener_count(nodes[0], event_types::CLICK), 0);
    }

    #[test]
    fn stopped_events_match_nothing() {
        let nodes = node_ids(1);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(nodes[0], event_types::CLICK, ());

        let mut event = Event::click(nodes[0]);
        event.stop_propagation();
        assert!(dispatcher.dispatch(&event).is_empty());
    }
}
