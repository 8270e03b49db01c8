//! Immediate-mode draw surface contract.
//!
//! Origin is top-left and y grows downward. Text is positioned by its baseline, the way bitmap
//! fonts are usually drawn.

use std::ops::{Deref, DerefMut};

use crate::core::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Host drawing primitives.
pub trait DrawSurface {
    /// Color used by subsequent fills and text.
    fn set_color(&mut self, color: Color);

    /// Solid rectangle fill.
    fn fill_rect(&mut self, rect: Rect);

    /// Bounding box of `text` when drawn at the origin.
    fn text_bounds(&self, text: &str) -> Rect;

    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// Push a translation; every call until the matching `pop_transform` is offset by it.
    fn push_transform(&mut self, dx: f32, dy: f32);

    fn pop_transform(&mut self);
}

/// RAII guard that pushes a translation and pops it on drop.
pub struct TransformScope<'a> {
    surface: &'a mut dyn DrawSurface,
}

impl<'a> TransformScope<'a> {
    pub fn push(surface: &'a mut dyn DrawSurface, dx: f32, dy: f32) -> Self {
        surface.push_transform(dx, dy);
        Self { surface }
    }
}

impl<'a> Deref for TransformScope<'a> {
    type Target = dyn DrawSurface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl<'a> DerefMut for TransformScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.surface.pop_transform();
    }
}
