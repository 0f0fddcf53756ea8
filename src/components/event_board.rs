use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::board::BoardState;
use crate::theme;

pub const HINT: &str = "Tap a date to add events.";
pub const PLACEHOLDER: &str = "Add event";
pub const BULLET: &str = "\u{2022}";

const BUTTON_WIDTH: u16 = 7;

/// Where the board's interactive parts land inside its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    pub heading: Rect,
    pub input: Rect,
    pub add_button: Rect,
    pub list: Rect,
}

impl BoardLayout {
    pub fn new(area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let rows = Layout::vertical([
            Constraint::Length(1), // date heading
            Constraint::Length(3), // input row
            Constraint::Fill(1),   // notes
        ])
        .split(inner);
        let input_row = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(rows[1]);

        Self {
            heading: rows[0],
            input: input_row[0],
            add_button: input_row[2],
            list: rows[2],
        }
    }
}

pub struct EventBoard;

impl EventBoard {
    /// `scroll` is the index of the first note shown; it is clamped so the
    /// list never scrolls past its last note.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &BoardState,
        input_focused: bool,
        scroll: usize,
    ) {
        let theme = theme::current();

        let Some(date) = state.selection else {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let hint = Paragraph::new(HINT)
                .style(theme.dim)
                .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
            return;
        };

        let notes = state.selected_notes();
        let count = match notes.len() {
            0 => String::new(),
            1 => " 1 note ".to_string(),
            n => format!(" {n} notes "),
        };
        let block = Block::default()
            .title(" Notes ")
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(count, theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);
        frame.render_widget(block, area);

        let layout = BoardLayout::new(area);

        frame.render_widget(
            Paragraph::new(date.to_string()).style(theme.header),
            layout.heading,
        );

        render_input(frame, layout.input, &state.draft, input_focused);

        let button_style = if state.can_add() {
            theme.accent.add_modifier(Modifier::BOLD)
        } else {
            theme.dim
        };
        let button = Paragraph::new("Add")
            .style(button_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(button_style));
        frame.render_widget(button, layout.add_button);

        let skip = scroll.min(max_scroll(notes.len(), layout.list));
        let items: Vec<ListItem> = notes
            .iter()
            .skip(skip)
            .map(|note| ListItem::new(format!("{BULLET} {note}")))
            .collect();
        frame.render_widget(List::new(items), layout.list);
    }
}

fn render_input(frame: &mut Frame, area: Rect, draft: &str, focused: bool) {
    let theme = theme::current();
    let border_style = if focused { theme.accent } else { theme.border };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if draft.is_empty() {
        frame.render_widget(Paragraph::new(PLACEHOLDER).style(theme.dim), inner);
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    // leave a column for the cursor
    let visible = visible_tail(draft, usize::from(inner.width.saturating_sub(1)));
    let width = Span::raw(visible).width() as u16;
    frame.render_widget(Paragraph::new(visible), inner);
    if focused {
        frame.set_cursor_position(Position::new(inner.x + width, inner.y));
    }
}

/// Largest useful first-note index for a list drawn into `list`.
pub fn max_scroll(note_count: usize, list: Rect) -> usize {
    note_count.saturating_sub(usize::from(list.height))
}

/// The longest suffix of `text` that fits in `width` columns.
fn visible_tail(text: &str, width: usize) -> &str {
    text.char_indices()
        .map(|(i, _)| &text[i..])
        .find(|tail| Span::raw(*tail).width() <= width)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::board::{reduce, Action};
    use crate::components::test_support::buffer_lines;

    fn draw(state: &BoardState, focused: bool) -> Terminal<TestBackend> {
        draw_scrolled(state, focused, 0)
    }

    fn draw_scrolled(state: &BoardState, focused: bool, scroll: usize) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| EventBoard::render(frame, frame.area(), state, focused, scroll))
            .unwrap();
        terminal
    }

    fn with_notes(count: usize) -> BoardState {
        let mut state = reduce(BoardState::new(), Action::DayTap("2024-03-05".parse().unwrap()));
        for i in 1..=count {
            state = reduce(state, Action::DraftChanged(format!("note{i}")));
            state = reduce(state, Action::AddEvent);
        }
        state
    }

    fn shown_notes(terminal: &Terminal<TestBackend>) -> Vec<String> {
        board_text(terminal)
            .into_iter()
            .filter(|line| line.starts_with(BULLET))
            .collect()
    }

    const BOX_CHARS: &str = "\u{2502}\u{2500}\u{250c}\u{2510}\u{2514}\u{2518}";

    fn board_text(terminal: &Terminal<TestBackend>) -> Vec<String> {
        buffer_lines(terminal.backend().buffer())
            .into_iter()
            .map(|line| {
                line.trim_matches(|c: char| c.is_whitespace() || BOX_CHARS.contains(c))
                    .to_string()
            })
            .filter(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn shows_only_the_hint_without_selection() {
        let terminal = draw(&BoardState::new(), false);
        assert_eq!(board_text(&terminal), [HINT]);
    }

    #[test]
    fn shows_date_input_and_bulleted_notes() {
        let state = [
            Action::DayTap("2024-03-05".parse().unwrap()),
            Action::DraftChanged("Dentist".to_string()),
            Action::AddEvent,
        ]
        .into_iter()
        .fold(BoardState::new(), reduce);

        let terminal = draw(&state, false);
        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[1].contains("2024-03-05"));
        assert!(lines[3].contains(PLACEHOLDER));
        assert!(lines[3].contains("Add"));
        let bullets: Vec<&String> = lines.iter().filter(|l| l.contains(BULLET)).collect();
        assert_eq!(bullets.len(), 1);
        assert!(bullets[0].contains("\u{2022} Dentist"));
        assert!(lines[9].contains("1 note"));
    }

    #[test]
    fn add_button_is_a_bordered_box() {
        let state = reduce(BoardState::new(), Action::DayTap("2024-03-05".parse().unwrap()));
        let terminal = draw(&state, false);
        let lines = buffer_lines(terminal.backend().buffer());
        let button: Vec<String> = lines[2..5]
            .iter()
            .map(|line| line.chars().skip(32).take(usize::from(BUTTON_WIDTH)).collect())
            .collect();
        assert_eq!(
            button,
            [
                "\u{250c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2510}",
                "\u{2502} Add \u{2502}",
                "\u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2518}",
            ]
        );
    }

    #[test]
    fn shows_draft_instead_of_placeholder() {
        let state = [
            Action::DayTap("2024-03-05".parse().unwrap()),
            Action::DraftChanged("Lunch".to_string()),
        ]
        .into_iter()
        .fold(BoardState::new(), reduce);

        let mut terminal = draw(&state, true);
        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[3].contains("Lunch"));
        assert!(!lines[3].contains(PLACEHOLDER));
        // input inner starts at column 2; cursor sits after the text
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(7, 3));
    }

    #[test]
    fn layout_places_button_right_of_input() {
        let layout = BoardLayout::new(Rect::new(0, 0, 40, 10));
        assert_eq!(layout.heading, Rect::new(1, 1, 38, 1));
        assert_eq!(layout.input, Rect::new(1, 2, 30, 3));
        assert_eq!(layout.add_button, Rect::new(32, 2, BUTTON_WIDTH, 3));
        assert_eq!(layout.list, Rect::new(1, 5, 38, 4));
    }

    #[test]
    fn scroll_offset_reaches_the_first_note() {
        // 40x10 leaves four rows for the list
        let state = with_notes(6);
        let top = draw_scrolled(&state, false, 0);
        assert_eq!(
            shown_notes(&top),
            ["\u{2022} note1", "\u{2022} note2", "\u{2022} note3", "\u{2022} note4"]
        );

        let bottom = draw_scrolled(&state, false, usize::MAX);
        assert_eq!(
            shown_notes(&bottom),
            ["\u{2022} note3", "\u{2022} note4", "\u{2022} note5", "\u{2022} note6"]
        );
    }

    #[test]
    fn max_scroll_depends_on_list_height() {
        let list = BoardLayout::new(Rect::new(0, 0, 40, 10)).list;
        assert_eq!(max_scroll(6, list), 2);
        assert_eq!(max_scroll(3, list), 0);
    }

    #[test]
    fn long_drafts_scroll_to_the_end() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
