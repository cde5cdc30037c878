//! The DOM-context stages of the Clawome pipeline: Prepare and Walk.
//!
//! Both stages are specified to run inside the browser's execution
//! context, synchronously and without yielding, against a document the
//! host has already stabilized (§5). This crate has no knowledge of how
//! that stabilization happens; it is handed a [`clawome_dom::Document`]
//! and returns the flat [`clawome_core::NodeRecord`] sequence Compress
//! consumes next.

mod actions;
mod attrs;
mod icon;
mod label;
mod prepare;
mod state;
mod text;
mod walk;
mod xpath;

pub use prepare::{prepare, PrepareReport};
pub use walk::{walk, WalkOutcome};
