//! Scrollback console widget.
//!
//! A console keeps an ordered history of prompts, draws it bottom-up inside a fixed box, and turns
//! key events into edits of the live input or a command-sent notification.
//!
//! Submission seals the live line and appends a new one *before* subscribers run, so anything a
//! subscriber writes in response lands on the new live line. Output written later is attributed
//! to whichever line is live at write time.

pub mod history;
mod render;

pub use history::{History, Line};
pub use render::PROMPT;

use crate::config::ConsoleOptions;
use crate::core::color::Color;
use crate::core::component::{Component, Focusable};
use crate::core::key::{Key, KeyEvent};
use crate::render::surface::DrawSurface;
use crate::runtime::command_registry::{CommandOutput, CommandSubscribers, SubscriptionId};
use crate::runtime::focus::DeferredFocus;

use render::{draw_history, RenderLayout};

/// Sizes at or below this value are ignored by the width/height setters.
pub const MIN_BOX_SIZE: u32 = 100;

pub const DEFAULT_WELCOME: &str = "tape_console.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleTheme {
    pub background: Color,
    pub foreground: Color,
    pub input: Color,
}

impl Default for ConsoleTheme {
    fn default() -> Self {
        Self {
            background: Color::rgba(0, 0, 0, 100),
            foreground: Color::gray(200),
            input: Color::WHITE,
        }
    }
}

pub struct Console {
    history: History,
    focus: DeferredFocus,
    subscribers: CommandSubscribers,
    theme: ConsoleTheme,
    width: u32,
    height: u32,
    margin: u32,
    line_ratio: f32,
}

impl Console {
    pub fn new(welcome: impl Into<String>) -> Self {
        Self::with_options(ConsoleOptions {
            welcome: welcome.into(),
            ..ConsoleOptions::default()
        })
    }

    pub fn with_options(options: ConsoleOptions) -> Self {
        let defaults = ConsoleOptions::default();
        let mut console = Self {
            history: History::new(options.welcome),
            focus: DeferredFocus::new(true),
            subscribers: CommandSubscribers::new(),
            theme: options.theme,
            width: defaults.width,
            height: defaults.height,
            margin: options.margin,
            line_ratio: options.line_ratio,
        };
        console.set_width(options.width);
        console.set_height(options.height);
        console
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Input typed on the live line so far.
    pub fn input(&self) -> &str {
        self.history.live().input()
    }

    /// Append output to the live line. Embedded newlines separate rows.
    pub fn write_output(&mut self, text: &str) {
        self.history.write_output(text);
    }

    /// Register a command-sent subscriber.
    ///
    /// Subscribers run synchronously, in registration order, after the submitted line has been
    /// sealed. Output written through the handle goes to the new live line.
    pub fn on_command<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&str, &mut CommandOutput<'_>) + 'static,
    {
        let id = self.subscribers.subscribe(Box::new(handler));
        tracing::debug!(id = id.raw(), "command subscriber added");
        id
    }

    pub fn remove_command_handler(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.unsubscribe(id);
        tracing::debug!(id = id.raw(), removed, "command subscriber removed");
        removed
    }

    pub fn has_focus(&self) -> bool {
        self.focus.is_focused()
    }

    /// Focus value applied at the next key-release.
    pub fn pending_focus(&self) -> bool {
        self.focus.pending()
    }

    /// Force focus now, or at the next key-release when `deferred`.
    pub fn set_focus(&mut self, focused: bool, deferred: bool) {
        self.focus.set(focused, deferred);
    }

    pub fn handle_key(&mut self, event: &KeyEvent) {
        if event.event_type.is_down() {
            self.key_pressed(event.code);
        } else {
            self.key_released(event.code);
        }
    }

    pub fn key_pressed(&mut self, code: i32) {
        let focused = self.focus.is_focused();
        tracing::trace!(code, focused, "key pressed");
        if !focused {
            return;
        }

        match Key::from_code(code) {
            Key::Return => self.submit(),
            Key::Backspace => self.history.backspace_input(),
            // Reserved until the input line has a movable cursor.
            Key::Delete => {}
            Key::Tab => self.focus.defer(false),
            Key::Char(ch) => self.history.append_input(ch),
            Key::Other(_) => {}
        }
    }

    pub fn key_released(&mut self, code: i32) {
        let changed = self.focus.commit();
        tracing::trace!(code, focused = self.focus.is_focused(), changed, "key released");
    }

    fn submit(&mut self) {
        let command = self.history.seal_and_advance().to_string();
        tracing::debug!(command = %command, lines = self.history.len(), "command submitted");
        self.subscribers.notify(&command, self.history.live_output_mut());
    }

    pub fn theme(&self) -> &ConsoleTheme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ConsoleTheme {
        &mut self.theme
    }

    pub fn set_theme(&mut self, theme: ConsoleTheme) {
        self.theme = theme;
    }

    pub fn set_background(&mut self, color: Color) {
        self.theme.background = color;
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.theme.foreground = color;
    }

    pub fn set_input_color(&mut self, color: Color) {
        self.theme.input = color;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, value: u32) {
        if value > MIN_BOX_SIZE {
            self.width = value;
        } else {
            tracing::debug!(
                value,
                current = self.width,
                "ignoring console width at or below floor"
            );
        }
    }

    pub fn set_height(&mut self, value: u32) {
        if value > MIN_BOX_SIZE {
            self.height = value;
        } else {
            tracing::debug!(
                value,
                current = self.height,
                "ignoring console height at or below floor"
            );
        }
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn set_margin(&mut self, margin: u32) {
        self.margin = margin;
    }

    /// Multiplier applied to the font's line box height.
    pub fn line_ratio(&self) -> f32 {
        self.line_ratio
    }

    pub fn set_line_ratio(&mut self, line_ratio: f32) {
        self.line_ratio = line_ratio;
    }

    /// Draw inside the console's own box with the top-left corner at `(x, y)`.
    pub fn draw(&self, surface: &mut dyn DrawSurface, x: f32, y: f32) {
        self.draw_sized(surface, x, y, self.width as f32, self.height as f32);
    }

    /// Draw inside an explicit `width` x `height` box.
    pub fn draw_sized(
        &self,
        surface: &mut dyn DrawSurface,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) {
        let layout = RenderLayout {
            width,
            height,
            margin: self.margin as f32,
            line_ratio: self.line_ratio,
        };
        draw_history(surface, &self.history, &self.theme, layout, x, y);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::with_options(ConsoleOptions::default())
    }
}

impl Component for Console {
    fn draw(&self, surface: &mut dyn DrawSurface, x: f32, y: f32) {
        Console::draw(self, surface, x, y);
    }

    fn handle_event(&mut self, event: &KeyEvent) {
        self.handle_key(event);
    }

    fn wants_key_release(&self) -> bool {
        true
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for Console {
    fn set_focused(&mut self, focused: bool) {
        self.set_focus(focused, false);
    }

    fn is_focused(&self) -> bool {
        self.has_focus()
    }
}
