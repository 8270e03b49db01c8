//! Bottom-up console renderer.
//!
//! Walks the history newest first. Each line contributes its input row, then its pending output
//! rows (last row first), then its sealed rows (most recent first). Drawing stops as soon as the
//! cursor climbs above the top margin. Rows wider than the box overflow to the right.

use crate::render::surface::{DrawSurface, Rect, TransformScope};

use super::history::History;
use super::ConsoleTheme;

pub const PROMPT: &str = ">";
const PROMPT_MEASURE: &str = "> ";
const PROMPT_ADVANCE_RATIO: f32 = 1.1;

/// Layout parameters for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RenderLayout {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub line_ratio: f32,
}

pub(crate) fn draw_history(
    surface: &mut dyn DrawSurface,
    history: &History,
    theme: &ConsoleTheme,
    layout: RenderLayout,
    x: f32,
    y: f32,
) {
    let _span = tracing::trace_span!("console_draw", lines = history.len()).entered();
    let mut scope = TransformScope::push(surface, x, y);

    scope.set_color(theme.background);
    scope.fill_rect(Rect::new(0.0, 0.0, layout.width, layout.height));

    let prompt_box = scope.text_bounds(PROMPT_MEASURE);
    let line_height = (prompt_box.height * layout.line_ratio).trunc();
    let input_dx = (prompt_box.width * PROMPT_ADVANCE_RATIO).trunc();
    let left = layout.margin;
    let top = layout.margin;
    let mut cursor_y = layout.height - layout.margin;
    let mut rows_drawn = 0usize;

    for line in history.newest_first() {
        if cursor_y < top {
            break;
        }

        scope.set_color(theme.input);
        scope.draw_text(PROMPT, left, cursor_y);
        scope.draw_text(line.input(), left + input_dx, cursor_y);
        cursor_y -= line_height;
        rows_drawn += 1;

        if !line.has_output() {
            continue;
        }
        scope.set_color(theme.foreground);
        let pending = line.pending_rows();
        let sealed = line.sealed_rows().iter().map(String::as_str);
        for row in pending.into_iter().rev().chain(sealed.rev()) {
            if cursor_y < top {
                break;
            }
            scope.draw_text(row, left, cursor_y);
            cursor_y -= line_height;
            rows_drawn += 1;
        }
    }

    tracing::trace!(rows_drawn, line_height, "console rows drawn");
}
