//! Draw surface contract and the headless recording surface.

pub mod recording;
pub mod surface;

pub use recording::{BitmapFontMetrics, DrawOp, DrawnText, RecordingSurface};
pub use surface::{DrawSurface, Rect, TransformScope};
