//! Scripted echo session: types a few commands into a console, answers them from a subscriber,
//! and prints the resulting draw calls.
//!
//! Run with `TAPE_CONSOLE_LOG_FILTER=tape_console=debug` to see submissions logged to stderr.

use tape_console::logging::init_logging;
use tape_console::{
    Color, Console, ConsoleOptions, DrawOp, EnvConfig, KeyEvent, RecordingSurface, KEY_BACKSPACE,
    KEY_RETURN, KEY_TAB,
};

fn tap(console: &mut Console, code: i32) {
    console.handle_key(&KeyEvent::press(code));
    console.handle_key(&KeyEvent::release(code));
}

fn type_text(console: &mut Console, text: &str) {
    for ch in text.chars() {
        tap(console, ch as i32);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&EnvConfig::from_env())?;

    let options = ConsoleOptions::default()
        .with_welcome("echo console. try `help`.\n")
        .with_size(320, 160)
        .with_colors(Color::rgba(0, 0, 0, 180), Color::gray(200), Color::rgb(120, 220, 120));
    let mut console = Console::with_options(options);

    console.on_command(|command, output| match command.trim() {
        "" => {}
        "help" => output.write("commands: help, echo <text>, clear-focus\n"),
        "clear-focus" => output.write_line("(focus drops after the next key release)"),
        other => match other.strip_prefix("echo ") {
            Some(text) => output.write_line(text),
            None => output.write_line(&format!("unknown command: {other}")),
        },
    });

    type_text(&mut console, "help");
    tap(&mut console, KEY_RETURN);
    type_text(&mut console, "echo hello, worlx");
    tap(&mut console, KEY_BACKSPACE);
    type_text(&mut console, "d");
    tap(&mut console, KEY_RETURN);
    type_text(&mut console, "nope");
    tap(&mut console, KEY_RETURN);
    tap(&mut console, KEY_TAB);
    type_text(&mut console, "ignored while unfocused");

    let mut surface = RecordingSurface::new();
    console.draw(&mut surface, 0.0, 0.0);

    println!(
        "{} lines in history, focus={}",
        console.history().len(),
        console.has_focus()
    );
    for op in surface.ops() {
        match op {
            DrawOp::Text { text, x, y } => println!("text  ({x:>5.1}, {y:>5.1})  {text}"),
            DrawOp::FillRect(rect) => println!(
                "fill  ({:>5.1}, {:>5.1})  {}x{}",
                rect.x, rect.y, rect.width, rect.height
            ),
            DrawOp::SetColor(color) => {
                println!("color rgba({}, {}, {}, {})", color.r, color.g, color.b, color.a)
            }
            DrawOp::PushTransform { dx, dy } => println!("push  ({dx}, {dy})"),
            DrawOp::PopTransform => println!("pop"),
        }
    }

    Ok(())
}
