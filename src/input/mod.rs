//! Input handling - pointer-event sanitizing and world-space mouse events.

pub mod mouse;
pub mod sanitizer;

pub use mouse::{MouseEvent, MouseSource};
pub use sanitizer::{ButtonState, Sanitizer};
