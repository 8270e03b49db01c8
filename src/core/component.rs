//! Component and Focusable traits.

use crate::core::key::KeyEvent;
use crate::render::surface::DrawSurface;

/// Drawable, key-driven component interface.
pub trait Component {
    /// Draw with the top-left corner at `(x, y)` in surface coordinates.
    fn draw(&self, surface: &mut dyn DrawSurface, x: f32, y: f32);

    /// Handle key events.
    fn handle_event(&mut self, _event: &KeyEvent) {}

    /// Whether this component wants key-release events.
    fn wants_key_release(&self) -> bool {
        false
    }

    /// Optional focusable behavior.
    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        None
    }
}

/// Focusable behavior for components that track focus.
pub trait Focusable {
    fn set_focused(&mut self, focused: bool);
    fn is_focused(&self) -> bool;
}
