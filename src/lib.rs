//! # spark-stage
//!
//! Reactive sprite stage for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! spark-stage bridges a signal-based game-logic layer and a retained-mode
//! surface of positioned image elements. Pointer events go in one side,
//! minimal surface mutations come out the other:
//!
//! ```text
//! raw pointer events → MouseSource → Signal<MouseEvent>
//!     → (your game logic) → RenderTree of reactive sprite lists
//!     → one reconciler per leaf → create/update/remove on the Surface
//! ```
//!
//! The reconciler is positional and incremental: unchanged sprites cost
//! nothing, a moved sprite rewrites one placement, a reskinned sprite
//! rewrites one `src`. Each leaf owns a contiguous block of z-indices, so
//! later leaves always paint on top of earlier ones without any cross-leaf
//! coordination.
//!
//! The surface itself is injected ([`surface::Surface`]): the crate never
//! touches a real DOM or scene graph, it just issues the four calls the
//! trait defines.
//!
//! ## Modules
//!
//! - [`types`] - Core types (points, rects, sprites)
//! - [`transform`] - World space ↔ pixel space
//! - [`input`] - Pointer sanitizing and world-space mouse events
//! - [`render`] - Render tree and the incremental reconciler
//! - [`surface`] - The injected surface trait + recording implementation
//! - [`stage`] - mount/unmount wiring

pub mod input;
pub mod render;
pub mod stage;
pub mod surface;
pub mod transform;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use input::{ButtonState, MouseEvent, MouseSource, Sanitizer};

pub use render::{RenderTree, SpriteSource, Unlisten, BASE_DEPTH, DEPTH_BLOCK, IMAGE_BASE_URL};

pub use surface::{
    ElementHandle, RecordingSurface, SharedSurface, Surface, SurfaceError, SurfaceOp,
};

pub use stage::{mount, StageHandle};

pub use transform::{rect_to_screen, to_screen, to_world};
