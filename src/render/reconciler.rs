//! Leaf reconciler - diff one sprite list against what is on the surface.
//!
//! One reconciler runs per render-tree leaf. It keeps the ordered list of
//! elements it created (`last`), and on every new sprite list computes the
//! minimal surface mutations:
//!
//! 1. Slots `0..min(old, new)` are *kept*: the element is reused, and its
//!    placement and/or image source are rewritten only if the corresponding
//!    sprite field actually changed.
//! 2. If the list shrank, trailing elements are removed.
//! 3. If it grew, new elements are created, placed, skinned and appended in
//!    ascending slot order, so document order matches depth order.
//!
//! Reuse is *positional*, not keyed: slot `i` always maps to element `i`.
//! If the logical set shrinks from the middle, higher slots shift content
//! into existing elements instead of moving elements around. That is a
//! deliberate simplification - downstream logic may rely on the stability,
//! so do not replace it with a keyed diff.

use spark_signals::effect;

use super::tree::{SpriteSource, Unlisten, DEPTH_BLOCK};
use crate::surface::{ElementHandle, SharedSurface, Surface, SurfaceError};
use crate::transform::rect_to_screen;
use crate::types::{AppearanceId, Sprite, WorldRect};

/// Base URL every sprite's appearance id is appended to when forming the
/// element's `src` attribute.
pub const IMAGE_BASE_URL: &str = "images/";

/// One live sprite slot: the surface element plus the sprite it currently
/// depicts.
struct RenderedElement {
    handle: ElementHandle,
    sprite: Sprite,
}

/// Subscribe a leaf to its sprite source.
///
/// The returned callback cancels the subscription; it does not remove the
/// elements already on the surface (bulk container teardown is the host's
/// job). The initial reconciliation runs synchronously before this returns.
pub(crate) fn spawn(
    source: SpriteSource,
    surface: SharedSurface,
    base_depth: i32,
) -> Unlisten {
    let mut last: Vec<RenderedElement> = Vec::new();

    let stop = effect(move || {
        let these = source.get();
        let mut surface = surface.borrow_mut();
        if let Err(err) = patch(&mut *surface, &mut last, &these, base_depth) {
            // Surface failures have no recovery path.
            panic!("surface mutation failed at depth {base_depth}: {err}");
        }
    });

    Box::new(stop)
}

/// Apply one new sprite list against the previously rendered state.
///
/// Synchronous; `last` holds exactly `these.len()` elements afterwards.
fn patch(
    surface: &mut dyn Surface,
    last: &mut Vec<RenderedElement>,
    these: &[Sprite],
    base_depth: i32,
) -> Result<(), SurfaceError> {
    debug_assert!(
        these.len() <= DEPTH_BLOCK as usize,
        "leaf at depth {base_depth} holds {} sprites, exceeding its block of {DEPTH_BLOCK}",
        these.len(),
    );

    let old_len = last.len();
    let kept = old_len.min(these.len());

    // Kept slots: reuse the element, rewrite only what changed.
    for (i, sprite) in these.iter().enumerate().take(kept) {
        let rendered = &mut last[i];
        if sprite.rect != rendered.sprite.rect {
            set_placement(surface, rendered.handle, &sprite.rect, base_depth + i as i32)?;
        }
        if sprite.appearance != rendered.sprite.appearance {
            surface.set_attribute(rendered.handle, "src", &image_url(&sprite.appearance))?;
        }
        rendered.sprite = sprite.clone();
    }

    // Shrink: drop every slot past the new length.
    if these.len() < old_len {
        for dropped in last.split_off(these.len()) {
            surface.remove_child(dropped.handle)?;
        }
    }

    // Grow: create, place, skin and append in ascending slot order.
    for (i, sprite) in these.iter().enumerate().skip(old_len) {
        let handle = surface.create_element("img")?;
        set_placement(surface, handle, &sprite.rect, base_depth + i as i32)?;
        surface.set_attribute(handle, "src", &image_url(&sprite.appearance))?;
        surface.set_attribute(handle, "draggable", "false")?;
        surface.append_child(handle)?;
        last.push(RenderedElement {
            handle,
            sprite: sprite.clone(),
        });
    }

    log::trace!(
        "leaf {base_depth}: {} slots ({} kept, {} created, {} removed)",
        these.len(),
        kept,
        these.len().saturating_sub(old_len),
        old_len.saturating_sub(these.len()),
    );

    Ok(())
}

/// Write an element's position, size and stacking depth.
fn set_placement(
    surface: &mut dyn Surface,
    handle: ElementHandle,
    rect: &WorldRect,
    depth: i32,
) -> Result<(), SurfaceError> {
    let screen = rect_to_screen(rect);
    let style = format!(
        "position:absolute;left:{}px;top:{}px;z-index:{};\
         user-select:none;-webkit-user-select:none;-moz-user-select:none",
        screen.origin.x, screen.origin.y, depth,
    );
    surface.set_attribute(handle, "style", &style)?;
    surface.set_attribute(handle, "width", &screen.extent.width.to_string())?;
    surface.set_attribute(handle, "height", &screen.extent.height.to_string())?;
    Ok(())
}

fn image_url(appearance: &AppearanceId) -> String {
    format!("{IMAGE_BASE_URL}{appearance}")
}

// =============================================================================
// Tests
// =============================================================================
