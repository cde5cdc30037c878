//! The host-side stages of the Clawome pipeline: Compress and Render.
//!
//! Everything here is pure, synchronous, and has no knowledge of the
//! live DOM; it consumes the flat [`clawome_core::NodeRecord`] sequence
//! `clawome-walker` produced and turns it into the textual grammar an
//! agent reads, plus the [`clawome_core::NodeMap`] that turns an
//! identifier back into a selector.

mod compress;
mod popup;
mod render;
mod shared;
mod simplify;
mod truncate;
mod tree;

pub use compress::{compress, CompressOutcome};
pub use render::render;
pub use shared::SharedNodeMap;
pub use tree::CompressedNode;
