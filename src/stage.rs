//! Stage - application wiring and lifecycle.
//!
//! [`mount`] is the crate's one entry point. It builds the mouse source,
//! runs the game's wiring function exactly once to obtain the render tree,
//! and folds the tree into per-leaf reconcilers. The returned handle feeds
//! raw pointer events in and tears everything down on unmount.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use spark_signals::signal;
//! use spark_stage::render::RenderTree;
//! use spark_stage::stage::mount;
//! use spark_stage::surface::{RecordingSurface, SharedSurface};
//! use spark_stage::types::{Sprite, WorldRect};
//!
//! let surface: SharedSurface = Rc::new(RefCell::new(RecordingSurface::new()));
//!
//! let handle = mount(surface, |_mouse| {
//!     let sprites = signal(vec![Sprite::new(
//!         WorldRect::from_parts(0.0, 0.0, 50.0, 50.0),
//!         "ship",
//!     )]);
//!     RenderTree::leaf(sprites)
//! });
//!
//! // ... feed handle.mouse() from the host's pointer events ...
//! handle.unmount();
//! ```

use crate::input::MouseSource;
use crate::render::tree::{build, RenderTree, Unlisten, BASE_DEPTH, DEPTH_BLOCK};
use crate::surface::SharedSurface;

// =============================================================================
// Stage handle
// =============================================================================

/// Handle returned by [`mount`].
///
/// Holds the aggregate unlisten for every leaf subscription and the mouse
/// source the host feeds. Unmounting (or dropping) cancels all subscriptions;
/// it does not remove elements already on the surface - tearing down the
/// container wholesale is the host's job.
pub struct StageHandle {
    unlisten: Option<Unlisten>,
    mouse: MouseSource,
}

impl StageHandle {
    /// The pointer-event entry points for this stage.
    pub fn mouse(&self) -> &MouseSource {
        &self.mouse
    }

    /// Cancel every leaf subscription. Safe to call once; dropping the
    /// handle without calling this does the same.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(unlisten) = self.unlisten.take() {
            unlisten();
            log::debug!("stage unmounted");
        }
    }
}

impl Drop for StageHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Mount
// =============================================================================

/// Wire a game onto a surface.
///
/// `game` runs exactly once, synchronously, receiving the mouse source its
/// logic will listen to and returning the render tree to put on screen. The
/// tree's shape is fixed for the life of the stage; its leaves' values drive
/// all further rendering. Leaves are assigned depth blocks in left-to-right
/// order starting at [`BASE_DEPTH`], and each leaf's initial sprite list is
/// rendered before `mount` returns.
pub fn mount<F>(surface: SharedSurface, game: F) -> StageHandle
where
    F: FnOnce(&MouseSource) -> RenderTree,
{
    let mouse = MouseSource::new(surface.clone());
    let tree = game(&mouse);

    let (unlisten, next_depth) = build(tree, &surface, BASE_DEPTH);
    log::debug!(
        "stage mounted: {} leaves",
        (next_depth - BASE_DEPTH) / DEPTH_BLOCK
    );

    StageHandle {
        unlisten: Some(unlisten),
        mouse,
    }
}

// =============================================================================
// Tests
// =============================================================================
