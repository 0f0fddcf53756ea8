use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Wait up to `timeout` for the next key press or mouse event.
///
/// Returns `None` on timeout and on resize, so the caller redraws.
pub fn next_input_event(timeout: Duration) -> color_eyre::Result<Option<InputEvent>> {
    loop {
        match poll_event(timeout)? {
            Some(event) => match classify(event) {
                Classified::Input(input) => return Ok(Some(input)),
                Classified::Redraw => return Ok(None),
                Classified::Ignore => continue,
            },
            None => return Ok(None),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Classified {
    Input(InputEvent),
    Redraw,
    Ignore,
}

fn classify(event: Event) -> Classified {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Classified::Input(InputEvent::Key(key)),
        Event::Mouse(mouse) => Classified::Input(InputEvent::Mouse(mouse)),
        Event::Resize(..) => Classified::Redraw,
        _ => Classified::Ignore,
    }
}
