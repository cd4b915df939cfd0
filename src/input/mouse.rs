//! Mouse source - raw pointer events in, clean world-space events out.
//!
//! Three raw input lines feed this: press, motion, release. Press and
//! release share one [`Sanitizer`] channel, so the published stream strictly
//! alternates Down/Up no matter how noisy the pointer source is. Motion is
//! never filtered.
//!
//! Every accepted event is converted from client pixels to world space
//! (subtracting the container offset queried from the surface, then applying
//! [`crate::transform::to_world`]) and published into a signal that external
//! game logic listens to.

use std::cell::RefCell;

use spark_signals::{signal, Signal};

use super::sanitizer::{ButtonState, Sanitizer};
use crate::surface::SharedSurface;
use crate::transform::to_world;
use crate::types::{ScreenPoint, WorldPoint};

/// A logical mouse event in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    Down(WorldPoint),
    Move(WorldPoint),
    Up(WorldPoint),
}

impl MouseEvent {
    /// The event's position, whichever kind it is.
    pub fn position(&self) -> WorldPoint {
        match *self {
            MouseEvent::Down(p) | MouseEvent::Move(p) | MouseEvent::Up(p) => p,
        }
    }
}

/// The crate's pointer-event publisher.
///
/// Owns the press/release sanitizer and the event signal. The host feeds raw
/// client-pixel events into [`press`](Self::press), [`motion`](Self::motion)
/// and [`release`](Self::release); game logic reads
/// [`events`](Self::events).
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use spark_stage::input::{MouseEvent, MouseSource};
/// use spark_stage::surface::{RecordingSurface, SharedSurface};
/// use spark_stage::types::ScreenPoint;
///
/// let surface: SharedSurface = Rc::new(RefCell::new(RecordingSurface::new()));
/// let mouse = MouseSource::new(surface);
///
/// // Pixel center of the 700x500 surface is world origin.
/// mouse.press(ScreenPoint::new(350.0, 250.0));
/// match mouse.events().get() {
///     Some(MouseEvent::Down(p)) => assert_eq!((p.x, p.y), (0.0, 0.0)),
///     other => panic!("unexpected event: {other:?}"),
/// }
/// ```
pub struct MouseSource {
    surface: SharedSurface,
    button: RefCell<Sanitizer>,
    events: Signal<Option<MouseEvent>>,
}

impl MouseSource {
    /// Create a mouse source publishing into a fresh event signal.
    ///
    /// The signal holds `None` until the first event arrives.
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface,
            button: RefCell::new(Sanitizer::new()),
            events: signal(None),
        }
    }

    /// The event stream game logic subscribes to.
    pub fn events(&self) -> Signal<Option<MouseEvent>> {
        self.events.clone()
    }

    /// Raw press at client-pixel coordinates. Sanitized to `Down`.
    pub fn press(&self, client: ScreenPoint) {
        let world = self.client_to_world(client);
        let events = self.events.clone();
        self.button.borrow_mut().apply(ButtonState::Down, move || {
            events.set(Some(MouseEvent::Down(world)));
        });
    }

    /// Raw movement at client-pixel coordinates. Always forwarded.
    pub fn motion(&self, client: ScreenPoint) {
        let world = self.client_to_world(client);
        self.events.set(Some(MouseEvent::Move(world)));
    }

    /// Raw release at client-pixel coordinates. Sanitized to `Up`.
    pub fn release(&self, client: ScreenPoint) {
        let world = self.client_to_world(client);
        let events = self.events.clone();
        self.button.borrow_mut().apply(ButtonState::Up, move || {
            events.set(Some(MouseEvent::Up(world)));
        });
    }

    /// Client pixels -> container-relative pixels -> world space.
    fn client_to_world(&self, client: ScreenPoint) -> WorldPoint {
        let offset = self.surface.borrow().offset();
        to_world(ScreenPoint::new(client.x - offset.x, client.y - offset.y))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::surface::RecordingSurface;
    use crate::transform::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn source_with_offset(offset: ScreenPoint) -> MouseSource {
        let surface: SharedSurface =
            Rc::new(RefCell::new(RecordingSurface::with_offset(offset)));
        MouseSource::new(surface)
    }

    #[test]
    fn test_press_maps_to_world_space() {
        let mouse = source_with_offset(ScreenPoint::new(0.0, 0.0));

        mouse.press(ScreenPoint::new(0.0, 0.0));
        assert_eq!(
            mouse.events().get(),
            Some(MouseEvent::Down(WorldPoint::new(-1400.0, 1000.0)))
        );

        mouse.release(ScreenPoint::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        assert_eq!(
            mouse.events().get(),
            Some(MouseEvent::Up(WorldPoint::new(1400.0, -1000.0)))
        );
    }

    #[test]
    fn test_container_offset_is_subtracted() {
        let mouse = source_with_offset(ScreenPoint::new(20.0, 30.0));

        // Client (370, 280) minus offset (20, 30) is the pixel center.
        mouse.motion(ScreenPoint::new(370.0, 280.0));
        assert_eq!(
            mouse.events().get(),
            Some(MouseEvent::Move(WorldPoint::new(0.0, 0.0)))
        );
    }

    #[test]
    fn test_duplicate_presses_publish_once() {
        let mouse = source_with_offset(ScreenPoint::new(0.0, 0.0));

        mouse.press(ScreenPoint::new(10.0, 10.0));
        let first = mouse.events().get();
        assert!(matches!(first, Some(MouseEvent::Down(_))));

        // Second press on an already-down channel is suppressed, even at a
        // different position.
        mouse.press(ScreenPoint::new(99.0, 99.0));
        assert_eq!(mouse.events().get(), first);
    }

    #[test]
    fn test_motion_is_never_filtered() {
        let mouse = source_with_offset(ScreenPoint::new(0.0, 0.0));

        mouse.press(ScreenPoint::new(10.0, 10.0));
        mouse.motion(ScreenPoint::new(11.0, 10.0));
        assert!(matches!(mouse.events().get(), Some(MouseEvent::Move(_))));

        mouse.motion(ScreenPoint::new(12.0, 10.0));
        assert!(matches!(mouse.events().get(), Some(MouseEvent::Move(_))));
    }

    #[test]
    fn test_release_without_press_is_suppressed() {
        let mouse = source_with_offset(ScreenPoint::new(0.0, 0.0));
        mouse.release(ScreenPoint::new(5.0, 5.0));
        assert_eq!(mouse.events().get(), None);
    }
}
