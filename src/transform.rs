//! Coordinate transform between world space and surface pixel space.
//!
//! Pure functions, no state. World space is y-up, centered, 2800x2000 units;
//! pixel space is y-down, top-left origin, 700x500 pixels. `to_world` is the
//! exact algebraic inverse of `to_screen`, which the mouse mapping relies on.

use crate::types::{Extent, ScreenPoint, ScreenRect, WorldPoint, WorldRect};

/// World units to pixels.
pub const SCALE: f64 = 0.25;

/// World x of the container's left edge.
pub const WORLD_LEFT: f64 = -1400.0;

/// World y of the container's top edge.
pub const WORLD_TOP: f64 = 1000.0;

/// Pixel width of the canonical world bounds.
pub const SCREEN_WIDTH: f64 = 700.0;

/// Pixel height of the canonical world bounds.
pub const SCREEN_HEIGHT: f64 = 500.0;

/// Map a world point to surface pixels.
#[inline]
pub fn to_screen(p: WorldPoint) -> ScreenPoint {
    ScreenPoint::new((p.x - WORLD_LEFT) * SCALE, (WORLD_TOP - p.y) * SCALE)
}

/// Map a surface pixel position back to world space.
///
/// Inverse of [`to_screen`] under the same constants.
#[inline]
pub fn to_world(p: ScreenPoint) -> WorldPoint {
    WorldPoint::new(p.x / SCALE + WORLD_LEFT, WORLD_TOP - p.y / SCALE)
}

/// Map a world rectangle to a pixel rectangle (top-left origin + pixel size).
///
/// The rect's origin is its center and its extent is *half*-extents: the
/// top-left corner in world space is `(x - w, y + h)` (`+ h` because world
/// is y-up, so the top edge has the larger y), and the pixel size is the
/// full extent `(2w, 2h)` scaled. Callers pass center + half-size geometry;
/// this convention is part of the contract, not something to normalize away.
#[inline]
pub fn rect_to_screen(r: &WorldRect) -> ScreenRect {
    let top_left = WorldPoint::new(
        r.origin.x - r.extent.width,
        r.origin.y + r.extent.height,
    );
    ScreenRect::new(
        to_screen(top_left),
        Extent::new(
            r.extent.width * SCALE * 2.0,
            r.extent.height * SCALE * 2.0,
        ),
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }

    #[test]
    fn test_known_corners() {
        let top_left = to_screen(WorldPoint::new(WORLD_LEFT, WORLD_TOP));
        assert_close(top_left.x, 0.0);
        assert_close(top_left.y, 0.0);

        let bottom_right = to_screen(WorldPoint::new(1400.0, -1000.0));
        assert_close(bottom_right.x, SCREEN_WIDTH);
        assert_close(bottom_right.y, SCREEN_HEIGHT);

        let center = to_screen(WorldPoint::new(0.0, 0.0));
        assert_close(center.x, SCREEN_WIDTH / 2.0);
        assert_close(center.y, SCREEN_HEIGHT / 2.0);
    }

    #[test]
    fn test_round_trip() {
        let points = [
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(WORLD_LEFT, WORLD_TOP),
            WorldPoint::new(1400.0, -1000.0),
            WorldPoint::new(-3.5, 812.25),
            WorldPoint::new(1399.99, -0.01),
        ];
        for p in points {
            let back = to_world(to_screen(p));
            assert_close(back.x, p.x);
            assert_close(back.y, p.y);
        }
    }

    #[test]
    fn test_round_trip_from_screen() {
        let p = ScreenPoint::new(123.0, 456.0);
        let back = to_screen(to_world(p));
        assert_close(back.x, p.x);
        assert_close(back.y, p.y);
    }

    #[test]
    fn test_rect_half_extent_convention() {
        // Center (0, 0), half-extents (10, 20): world top-left is (-10, 20).
        let rect = WorldRect::from_parts(0.0, 0.0, 10.0, 20.0);
        let screen = rect_to_screen(&rect);

        assert_close(screen.origin.x, (-10.0 - WORLD_LEFT) * SCALE); // 347.5
        assert_close(screen.origin.y, (WORLD_TOP - 20.0) * SCALE); // 245.0

        // Pixel size is the full extent, scaled.
        assert_close(screen.extent.width, 5.0);
        assert_close(screen.extent.height, 10.0);
    }
}
