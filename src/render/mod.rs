//! Rendering - the incremental reconciliation engine.
//!
//! A [`RenderTree`] (fixed shape, reactive leaves) is folded once at mount
//! time into one reconciler per leaf. Each reconciler subscribes to its
//! leaf's sprite list and patches the surface with the minimal set of
//! create/update/remove calls on every change.

pub mod reconciler;
pub mod tree;

pub use reconciler::IMAGE_BASE_URL;
pub use tree::{RenderTree, SpriteSource, Unlisten, BASE_DEPTH, DEPTH_BLOCK};
