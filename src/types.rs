//! Core types for spark-stage.
//!
//! These types define the foundation everything builds on: the two coordinate
//! spaces, sprite geometry, and sprite appearance. They flow from game logic
//! through the reconciler down to the surface.
//!
//! All comparisons are structural. Sprites are plain values - whether a
//! surface element needs updating is decided by field-wise equality against
//! the sprite it currently depicts.

use std::fmt;

// =============================================================================
// World space
// =============================================================================

/// A point in abstract world space.
///
/// World space is y-up with the origin at the center of the playfield.
/// The canonical bounds are x in [-1400, 1400] and y in [-1000, 1000].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A full width/height pair, in the units of whichever space it appears in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    /// Create a new extent.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle in world space.
///
/// `origin` is the rectangle's *center*. The transform treats `extent` as
/// half-extents when computing corners: the left edge is `origin.x -
/// extent.width`, the top edge is `origin.y + extent.height`. Callers pass
/// center + half-size sprite geometry, so this convention is part of the
/// contract - see [`crate::transform::rect_to_screen`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldRect {
    pub origin: WorldPoint,
    pub extent: Extent,
}

impl WorldRect {
    /// Create a new world rectangle from center and half-extents.
    pub const fn new(origin: WorldPoint, extent: Extent) -> Self {
        Self { origin, extent }
    }

    /// Convenience constructor from raw coordinates.
    pub const fn from_parts(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: WorldPoint::new(x, y),
            extent: Extent::new(width, height),
        }
    }
}

// =============================================================================
// Screen space
// =============================================================================

/// A point in surface pixel space.
///
/// Pixel space is y-down with the origin at the top-left of the container.
/// The canonical world bounds map to x in [0, 700] and y in [0, 500].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle in surface pixel space: top-left origin plus pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub origin: ScreenPoint,
    pub extent: Extent,
}

impl ScreenRect {
    /// Create a new screen rectangle.
    pub const fn new(origin: ScreenPoint, extent: Extent) -> Self {
        Self { origin, extent }
    }
}

// =============================================================================
// Sprites
// =============================================================================

/// Identifies which image a sprite shows.
///
/// The reconciler forms the element's `src` attribute by appending this id
/// to a fixed base URL. Compared by value, like everything else here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppearanceId(String);

impl AppearanceId {
    /// Create a new appearance id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppearanceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AppearanceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AppearanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One visible thing: where it is and what image it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub rect: WorldRect,
    pub appearance: AppearanceId,
}

impl Sprite {
    /// Create a new sprite.
    pub fn new(rect: WorldRect, appearance: impl Into<AppearanceId>) -> Self {
        Self {
            rect,
            appearance: appearance.into(),
        }
    }
}

/// An ordered sprite sequence. Order is paint order: later entries stack
/// on top of earlier ones.
pub type SpriteList = Vec<Sprite>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_structural_equality() {
        let a = Sprite::new(WorldRect::from_parts(10.0, -20.0, 50.0, 50.0), "ship");
        let b = Sprite::new(WorldRect::from_parts(10.0, -20.0, 50.0, 50.0), "ship");
        assert_eq!(a, b);

        let moved = Sprite::new(WorldRect::from_parts(11.0, -20.0, 50.0, 50.0), "ship");
        assert_ne!(a, moved);

        let reskinned = Sprite::new(WorldRect::from_parts(10.0, -20.0, 50.0, 50.0), "rock");
        assert_ne!(a, reskinned);
    }

    #[test]
    fn test_appearance_id_conversions() {
        let from_str = AppearanceId::from("missile");
        let from_string = AppearanceId::from("missile".to_string());
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.as_str(), "missile");
        assert_eq!(from_str.to_string(), "missile");
    }
}
