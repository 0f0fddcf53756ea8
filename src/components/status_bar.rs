use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::Focus;
use crate::board::DateKey;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        focus: Focus,
        selection: Option<DateKey>,
        note_count: usize,
        message: Option<&str>,
    ) {
        let w = area.width as usize;
        let style = theme::current().status;

        let focus_str = match focus {
            Focus::Calendar => "[Calendar]",
            Focus::Input => "[Input]",
        };
        let left = match selection {
            Some(date) => format!(" {} {} ({}) ", focus_str, date, note_count),
            None => format!(" {} ", focus_str),
        };

        // Show status message if present, otherwise show context-aware hints
        let right = if let Some(msg) = message {
            format!(" {} ", msg)
        } else {
            hints(focus, selection.is_some(), w.saturating_sub(left.len())).to_string()
        };

        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right.chars().count()));

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

fn hints(focus: Focus, has_selection: bool, room: usize) -> &'static str {
    match focus {
        Focus::Input if room >= 55 => " Enter:Add \u{2191}\u{2193}:Scroll Esc/Tab:Calendar Ctrl-C:Quit ",
        Focus::Input => " Enter:Add Esc:Back ",
        Focus::Calendar if has_selection && room >= 62 => {
            " hjkl:Move [/]:Month Enter:Select Tab:Write ?:Help q:Quit "
        }
        Focus::Calendar if room >= 50 => " hjkl:Move [/]:Month Enter:Select ?:Help q:Quit ",
        Focus::Calendar => " ?:Help q:Quit ",
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::components::test_support::buffer_lines;

    fn render(
        width: u16,
        focus: Focus,
        selection: Option<DateKey>,
        message: Option<&str>,
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| StatusBar::render(frame, frame.area(), focus, selection, 2, message))
            .unwrap();
        buffer_lines(terminal.backend().buffer()).remove(0)
    }

    #[test]
    fn shows_selection_and_count() {
        let line = render(100, Focus::Calendar, Some("2024-03-05".parse().unwrap()), None);
        assert!(line.starts_with(" [Calendar] 2024-03-05 (2) "));
        assert!(line.contains("Tab:Write"));
    }

    #[test]
    fn message_replaces_hints() {
        let line = render(100, Focus::Input, None, Some("Added note"));
        assert!(line.contains("Added note"));
        assert!(!line.contains("Enter:Add"));
    }

    #[test]
    fn input_hints_mention_scrolling() {
        let line = render(100, Focus::Input, Some("2024-03-05".parse().unwrap()), None);
        assert!(line.contains("\u{2191}\u{2193}:Scroll"));
    }

    #[test]
    fn narrow_terminal_gets_short_hints() {
        let line = render(30, Focus::Calendar, None, None);
        assert!(line.contains("?:Help q:Quit"));
        assert!(!line.contains("hjkl"));
    }
}
