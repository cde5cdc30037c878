use std::collections::HashSet;

use crate::node::NodeId;
use crate::selector::Selector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseDown,
    PointerDown,
}

/// Models the `addEventListener` interceptor installed before page
/// scripts run (§4.2, §9 "Event-listener interception"). A real host
/// patches the event-registration entry point in a freshly created
/// document and records every element that ever receives a `click`,
/// `mousedown`, or `pointerdown` listener; here, fixtures populate this
/// registry directly to simulate that capture having already happened.
#[derive(Debug, Clone, Default)]
pub struct EventListenerRegistry {
    recorded: HashSet<NodeId>,
}

impl EventListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, node: NodeId, kind: EventKind) {
        if matches!(
            kind,
            EventKind::Click | EventKind::MouseDown | EventKind::PointerDown
        ) {
            self.recorded.insert(node);
        }
    }

    pub fn has_listener(&self, node: NodeId) -> bool {
        self.recorded.contains(&node)
    }
}

/// One jQuery-style (or other framework-delegation) registry entry:
/// `$(root).on('click', '.row', handler)`. Prepare probes these,
/// resolving `delegation_selector` under `querySelectorAll` scoped to
/// `root` to find the concrete targets a click is delegated to.
#[derive(Debug, Clone)]
pub struct JQueryDelegation {
    pub root: NodeId,
    pub event: EventKind,
    pub delegation_selector: Selector,
}
