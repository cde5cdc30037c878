//! A minimal synthetic live-DOM model.
//!
//! Clawome's core (Prepare + Walk) is specified to consume "a
//! fully-loaded live DOM provided by its host" — normally a real
//! browser's document, reached over a remote-debugging or JS-execution
//! bridge that lives outside this crate's scope. This crate stands in
//! for that host contract: an in-process arena of elements and text
//! nodes with just enough styling, geometry, and event-registry
//! simulation for `clawome-walker` to exercise every Prepare/Walk rule
//! against, and for tests to build fixture pages without a real browser.
//!
//! It is not a rendering engine: there is no layout, no cascade, no
//! network. Computed style and geometry are supplied directly by
//! whoever builds the document (a host driving a real browser would
//! fill these fields from `getComputedStyle`/`getBoundingClientRect`).

mod document;
mod events;
mod node;
mod selector;
mod style;

pub use document::Document;
pub use events::{EventKind, EventListenerRegistry, JQueryDelegation};
pub use node::{DomNode, ElementData, NodeId, SwitchState};
pub use selector::Selector;
pub use style::{ComputedStyle, CssRule, Display, StyleSheet, Visibility};
