//! End-to-end console behavior driven through host key events.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use tape_console::{
    Component, Console, KeyEvent, RecordingSurface, KEY_BACKSPACE, KEY_RETURN, KEY_TAB, PROMPT,
};

fn send(console: &mut dyn Component, events: &[KeyEvent]) {
    for event in events {
        if event.event_type.is_down() || console.wants_key_release() {
            console.handle_event(event);
        }
    }
}

fn tap(code: i32) -> [KeyEvent; 2] {
    [KeyEvent::press(code), KeyEvent::release(code)]
}

fn type_line(console: &mut Console, text: &str) {
    for ch in text.chars() {
        send(console, &tap(ch as i32));
    }
    send(console, &tap(KEY_RETURN));
}

#[test]
fn buffer_has_one_line_more_than_commands() {
    let mut console = Console::new("ready");
    assert_eq!(console.history().len(), 1);
    for (index, command) in ["pwd", "ls", "", "exit"].iter().enumerate() {
        type_line(&mut console, command);
        assert_eq!(console.history().len(), index + 2);
    }
}

#[test]
fn subscriber_output_never_attaches_to_triggering_line() {
    let mut console = Console::new("ready");
    console.on_command(|command, output| {
        output.write(command);
        output.write("\n");
    });

    type_line(&mut console, "first");
    type_line(&mut console, "second");

    let lines: Vec<(String, Vec<String>)> = console
        .history()
        .lines()
        .map(|line| (line.input().to_string(), line.sealed_rows().to_vec()))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("first".to_string(), vec!["ready".to_string()]),
            ("second".to_string(), vec!["first".to_string()]),
            (String::new(), Vec::new()),
        ]
    );
    assert_eq!(console.history().live().pending_output(), "second\n");
}

#[test]
fn echo_session_renders_newest_at_bottom() {
    let mut console = Console::new("ready");
    console.on_command(|command, output| output.write_line(&command.to_uppercase()));
    type_line(&mut console, "hi");
    for ch in "wip".chars() {
        send(&mut console, &tap(ch as i32));
    }
    send(&mut console, &tap(KEY_BACKSPACE));

    let mut surface = RecordingSurface::new();
    console.draw(&mut surface, 0.0, 0.0);

    assert_eq!(
        surface.text_strings(),
        vec![PROMPT, "wi", "HI", PROMPT, "hi", "ready"]
    );
    let bottom = &surface.texts()[0];
    assert_eq!(bottom.y, 180.0);
}

#[test]
fn tab_release_unfocuses_until_set_focus() {
    let mut console = Console::default();
    send(&mut console, &tap(KEY_TAB));
    assert!(!console.has_focus());

    type_line(&mut console, "ignored");
    assert_eq!(console.history().len(), 1);
    assert_eq!(console.input(), "");

    console.set_focus(true, false);
    type_line(&mut console, "ok");
    assert_eq!(console.history().len(), 2);
}

#[test]
fn shared_state_subscriber_can_collect_commands() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut console = Console::default();
    let sink = Rc::clone(&log);
    console.on_command(move |command, _| sink.borrow_mut().push(command.to_string()));

    type_line(&mut console, "a");
    type_line(&mut console, "b c");
    assert_eq!(*log.borrow(), vec!["a".to_string(), "b c".to_string()]);
}

#[test]
fn width_below_floor_keeps_previous_value() {
    let mut console = Console::default();
    assert_eq!(console.width(), 200);
    console.set_width(50);
    assert_eq!(console.width(), 200);
}
