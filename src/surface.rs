//! Surface abstraction - the retained-mode output this crate drives.
//!
//! The real element store (a DOM, a scene graph, whatever) lives outside the
//! crate; the reconciler only ever talks to this small imperative API:
//! create an element, set an attribute on it, append it to the single
//! container, remove it. Handles are opaque tokens minted by the surface.
//!
//! Surface failures are unexpected and fatal - the reconciler has no recovery
//! path, so errors propagate out rather than being swallowed.
//!
//! [`RecordingSurface`] is an in-memory implementation that logs every call.
//! It backs the crate's own tests and works as a headless surface.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::types::ScreenPoint;

// =============================================================================
// Handles and errors
// =============================================================================

/// Opaque handle to one surface element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(u64);

impl ElementHandle {
    /// Wrap a raw id. Surfaces mint these; everyone else just passes them
    /// back in.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Fatal surface-binding failures.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("element {0:?} is not known to the surface")]
    UnknownElement(ElementHandle),

    #[error("element {0:?} is not attached to the container")]
    NotAttached(ElementHandle),

    #[error("surface rejected element creation: {0}")]
    CreateFailed(String),
}

// =============================================================================
// Surface trait
// =============================================================================

/// The imperative surface the reconciler mutates.
///
/// One instance represents one container element plus the children the
/// reconciler manages inside it. All calls happen on the single event
/// thread; implementations need no internal synchronization.
pub trait Surface {
    /// Create a detached element of the given tag.
    fn create_element(&mut self, tag: &str) -> Result<ElementHandle, SurfaceError>;

    /// Set an attribute on an element.
    fn set_attribute(
        &mut self,
        handle: ElementHandle,
        name: &str,
        value: &str,
    ) -> Result<(), SurfaceError>;

    /// Append an element to the container, after all current children.
    fn append_child(&mut self, handle: ElementHandle) -> Result<(), SurfaceError>;

    /// Remove an element from the container.
    fn remove_child(&mut self, handle: ElementHandle) -> Result<(), SurfaceError>;

    /// The container's offset (offset-left/offset-top) in client pixels.
    ///
    /// Pointer events arrive in client coordinates; this is subtracted
    /// before mapping into world space.
    fn offset(&self) -> ScreenPoint {
        ScreenPoint::new(0.0, 0.0)
    }
}

/// Shared handle to the one surface every leaf reconciler mutates.
///
/// Single-threaded by design, matching the event model: `Rc` + `RefCell`,
/// never `Arc` + locks.
pub type SharedSurface = Rc<RefCell<dyn Surface>>;

// =============================================================================
// Recording surface
// =============================================================================

/// One recorded surface mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Create {
        handle: ElementHandle,
        tag: String,
    },
    SetAttribute {
        handle: ElementHandle,
        name: String,
        value: String,
    },
    Append {
        handle: ElementHandle,
    },
    Remove {
        handle: ElementHandle,
    },
}

/// In-memory surface that records every operation.
///
/// Keeps the op log, the current attribute values, and the ordered list of
/// attached children, so tests can assert both *what happened* and *what the
/// surface looks like now*. Ops on handles it never minted, or removals of
/// detached elements, fail - the error paths are real, not decorative.
#[derive(Default)]
pub struct RecordingSurface {
    next_id: u64,
    ops: Vec<SurfaceOp>,
    attrs: HashMap<(ElementHandle, String), String>,
    children: Vec<ElementHandle>,
    known: Vec<ElementHandle>,
    offset: ScreenPoint,
}

impl RecordingSurface {
    /// Create an empty recording surface at offset (0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording surface whose container sits at the given client
    /// offset.
    pub fn with_offset(offset: ScreenPoint) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// All operations recorded so far, in call order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drop the op log (state is kept). Useful between test phases.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Currently attached children, in document order.
    pub fn children(&self) -> &[ElementHandle] {
        &self.children
    }

    /// Number of currently attached children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Current value of an attribute, if it was ever set.
    pub fn attr(&self, handle: ElementHandle, name: &str) -> Option<&str> {
        self.attrs
            .get(&(handle, name.to_string()))
            .map(String::as_str)
    }

    fn check_known(&self, handle: ElementHandle) -> Result<(), SurfaceError> {
        if self.known.contains(&handle) {
            Ok(())
        } else {
            Err(SurfaceError::UnknownElement(handle))
        }
    }
}

impl Surface for RecordingSurface {
    fn create_element(&mut self, tag: &str) -> Result<ElementHandle, SurfaceError> {
        let handle = ElementHandle::new(self.next_id);
        self.next_id += 1;
        self.known.push(handle);
        self.ops.push(SurfaceOp::Create {
            handle,
            tag: tag.to_string(),
        });
        Ok(handle)
    }

    fn set_attribute(
        &mut self,
        handle: ElementHandle,
        name: &str,
        value: &str,
    ) -> Result<(), SurfaceError> {
        self.check_known(handle)?;
        self.attrs
            .insert((handle, name.to_string()), value.to_string());
        self.ops.push(SurfaceOp::SetAttribute {
            handle,
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn append_child(&mut self, handle: ElementHandle) -> Result<(), SurfaceError> {
        self.check_known(handle)?;
        self.children.push(handle);
        self.ops.push(SurfaceOp::Append { handle });
        Ok(())
    }

    fn remove_child(&mut self, handle: ElementHandle) -> Result<(), SurfaceError> {
        self.check_known(handle)?;
        let position = self
            .children
            .iter()
            .position(|&h| h == handle)
            .ok_or(SurfaceError::NotAttached(handle))?;
        self.children.remove(position);
        self.ops.push(SurfaceOp::Remove { handle });
        Ok(())
    }

    fn offset(&self) -> ScreenPoint {
        self.offset
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_append_remove() {
        let mut surface = RecordingSurface::new();

        let a = surface.create_element("img").unwrap();
        let b = surface.create_element("img").unwrap();
        assert_ne!(a, b);

        surface.append_child(a).unwrap();
        surface.append_child(b).unwrap();
        assert_eq!(surface.children(), &[a, b]);

        surface.remove_child(a).unwrap();
        assert_eq!(surface.children(), &[b]);
        assert_eq!(surface.ops().len(), 5);
    }

    #[test]
    fn test_attributes_keep_latest_value() {
        let mut surface = RecordingSurface::new();
        let el = surface.create_element("img").unwrap();

        surface.set_attribute(el, "src", "images/ship.png").unwrap();
        surface.set_attribute(el, "src", "images/rock.png").unwrap();

        assert_eq!(surface.attr(el, "src"), Some("images/rock.png"));
        assert_eq!(surface.attr(el, "width"), None);
    }

    #[test]
    fn test_unknown_handle_is_an_error() {
        let mut surface = RecordingSurface::new();
        let bogus = ElementHandle::new(999);

        assert!(matches!(
            surface.set_attribute(bogus, "src", "x"),
            Err(SurfaceError::UnknownElement(_))
        ));
        assert!(matches!(
            surface.remove_child(bogus),
            Err(SurfaceError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_remove_detached_is_an_error() {
        let mut surface = RecordingSurface::new();
        let el = surface.create_element("img").unwrap();

        assert!(matches!(
            surface.remove_child(el),
            Err(SurfaceError::NotAttached(_))
        ));
    }
}
