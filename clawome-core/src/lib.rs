//! Shared types for the Clawome DOM compression pipeline.
//!
//! This crate carries no traversal logic of its own. It defines the data
//! model shared between the DOM-context stages (`clawome-walker`) and the
//! host-side stages (`clawome-compress`): the walker node record, the
//! hierarchical identifier scheme, the action/state vocabularies, the
//! configuration surface, and the error and statistics types that cross
//! the stage boundary.

mod action;
mod attrs;
mod config;
mod error;
mod id;
mod node_map;
mod record;
mod stats;
mod state;

pub use action::ActionSet;
pub use attrs::{format_attr_value, format_attrs, AttrEntry};
pub use config::{Config, RenderMode};
pub use error::PipelineError;
pub use id::{BackRef, HierarchicalId};
pub use node_map::NodeMap;
pub use record::NodeRecord;
pub use stats::ExtractStats;
pub use state::StateMap;
