//! Render tree - fixed-shape composition of reactive sprite lists.
//!
//! Game logic hands the stage a binary tree whose leaves each produce a
//! sprite list over time and whose internal nodes mean "left stacks below
//! right". The tree's *shape* never changes after mount; only the leaves'
//! values do. A single depth-first construction pass gives every leaf a
//! contiguous block of z-indices and spawns its reconciler, threading the
//! depth counter through the fold as an explicit accumulator.

use std::rc::Rc;

use spark_signals::Signal;

use super::reconciler;
use crate::surface::SharedSurface;
use crate::types::SpriteList;

/// Teardown callback. Calling it cancels every subscription it covers;
/// surface elements already on screen are left for the host to bulk-remove.
pub type Unlisten = Box<dyn FnOnce()>;

/// Z-index range reserved per leaf. A leaf may grow to this many sprites
/// before colliding with the next leaf's block; exceeding it is a
/// precondition violation checked in debug builds.
pub const DEPTH_BLOCK: i32 = 1000;

/// Depth counter start. Arbitrarily low so every assigned z-index stays
/// well below anything the host might place in the container itself.
pub const BASE_DEPTH: i32 = -1_000_000;

// =============================================================================
// Sprite sources
// =============================================================================

/// Where a leaf's sprite list comes from.
///
/// Reading a `Signal` or `Getter` variant inside the reconciler's effect
/// tracks it as a dependency, so the leaf re-renders on change. `Static`
/// renders once and never again.
#[derive(Clone)]
pub enum SpriteSource {
    /// A fixed list.
    Static(SpriteList),
    /// A reactive signal.
    Signal(Signal<SpriteList>),
    /// A computed getter (wrap deriveds, selectors, anything callable).
    Getter(Rc<dyn Fn() -> SpriteList>),
}

impl SpriteSource {
    /// Current value. Tracks dependencies when called inside an effect.
    pub fn get(&self) -> SpriteList {
        match self {
            SpriteSource::Static(list) => list.clone(),
            SpriteSource::Signal(sig) => sig.get(),
            SpriteSource::Getter(getter) => getter(),
        }
    }
}

impl From<SpriteList> for SpriteSource {
    fn from(list: SpriteList) -> Self {
        SpriteSource::Static(list)
    }
}

impl From<Signal<SpriteList>> for SpriteSource {
    fn from(sig: Signal<SpriteList>) -> Self {
        SpriteSource::Signal(sig)
    }
}

// =============================================================================
// Render tree
// =============================================================================

/// The composition game logic hands to [`crate::stage::mount`].
pub enum RenderTree {
    /// One reactive sprite list.
    Leaf(SpriteSource),
    /// Everything in the left subtree paints below everything in the right.
    Concat(Box<RenderTree>, Box<RenderTree>),
}

impl RenderTree {
    /// A leaf from any sprite source.
    pub fn leaf(source: impl Into<SpriteSource>) -> Self {
        RenderTree::Leaf(source.into())
    }

    /// Stack `above` on top of `self`.
    pub fn over(self, above: RenderTree) -> Self {
        RenderTree::Concat(Box::new(self), Box::new(above))
    }

    /// Number of leaves, in case the host wants to size anything up front.
    pub fn leaf_count(&self) -> usize {
        match self {
            RenderTree::Leaf(_) => 1,
            RenderTree::Concat(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Fold the tree into per-leaf reconcilers.
///
/// Leaves are visited depth-first left-to-right; each consumes one
/// [`DEPTH_BLOCK`] of the depth counter whether or not it ever fills it.
/// Internal nodes do no reconciliation of their own - they just merge their
/// children's teardown callbacks. Returns the combined unlisten and the next
/// free depth.
pub(crate) fn build(
    tree: RenderTree,
    surface: &SharedSurface,
    depth: i32,
) -> (Unlisten, i32) {
    match tree {
        RenderTree::Leaf(source) => {
            let unlisten = reconciler::spawn(source, surface.clone(), depth);
            (unlisten, depth + DEPTH_BLOCK)
        }
        RenderTree::Concat(left, right) => {
            let (unlisten_left, depth) = build(*left, surface, depth);
            let (unlisten_right, depth) = build(*right, surface, depth);
            let combined = Box::new(move || {
                unlisten_left();
                unlisten_right();
            });
            (combined, depth)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sprite, WorldRect};

    fn sprite(id: &str) -> Sprite {
        Sprite::new(WorldRect::from_parts(0.0, 0.0, 10.0, 10.0), id)
    }

    #[test]
    fn test_leaf_count() {
        let tree = RenderTree::leaf(vec![sprite("a")])
            .over(RenderTree::leaf(vec![sprite("b")]))
            .over(RenderTree::leaf(vec![sprite("c")]));
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn test_static_source_get() {
        let source = SpriteSource::from(vec![sprite("a"), sprite("b")]);
        assert_eq!(source.get().len(), 2);
    }

    #[test]
    fn test_getter_source_get() {
        let source = SpriteSource::Getter(Rc::new(|| vec![sprite("x")]));
        assert_eq!(source.get(), vec![sprite("x")]);
    }
}
