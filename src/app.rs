use chrono::{Days, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::board::{reduce, Action, BoardState, DateKey};
use crate::components::event_board::max_scroll;
use crate::components::{BoardLayout, MonthGrid};
use crate::config::WeekStart;
use crate::event::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Calendar,
    Input,
}

/// Where the last frame put things, for mouse hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub calendar: Rect,
    pub board: Option<BoardLayout>,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub board: BoardState,
    pub cursor: NaiveDate,
    pub today: NaiveDate,
    pub week_start: WeekStart,
    pub focus: Focus,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub layout: ScreenLayout,
    /// Index of the first note shown for the selected day.
    pub notes_scroll: usize,
}

impl App {
    pub fn new(today: NaiveDate, week_start: WeekStart) -> Self {
        Self {
            running: true,
            board: BoardState::new(),
            cursor: today,
            today,
            week_start,
            focus: Focus::Calendar,
            show_help: false,
            status_message: None,
            layout: ScreenLayout::default(),
            notes_scroll: 0,
        }
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid {
            cursor: self.cursor,
            today: self.today,
            week_start: self.week_start,
            focused: self.focus == Focus::Calendar,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.board);
        self.board = reduce(state, action);
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear status message on any key
        self.status_message = None;

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
            && key.code == KeyCode::Char('c')
        {
            self.quit();
            return;
        }

        // Help overlay takes priority
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match self.focus {
            Focus::Calendar => self.handle_calendar_key(key.code),
            Focus::Input => self.handle_input_key(key.code, key.modifiers),
        }
    }

    fn handle_calendar_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Left | KeyCode::Char('h') => self.prev_day(),
            KeyCode::Right | KeyCode::Char('l') => self.next_day(),
            KeyCode::Up | KeyCode::Char('k') => self.prev_week(),
            KeyCode::Down | KeyCode::Char('j') => self.next_week(),
            KeyCode::Char('K') => self.scroll_notes_up(),
            KeyCode::Char('J') => self.scroll_notes_down(),
            KeyCode::Char('[') | KeyCode::PageUp => self.prev_month(),
            KeyCode::Char(']') | KeyCode::PageDown => self.next_month(),
            KeyCode::Char('t') => self.go_to_today(),
            KeyCode::Enter | KeyCode::Char(' ') => self.tap(DateKey::from(self.cursor)),
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') => self.focus_input(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => self.focus = Focus::Calendar,
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.scroll_notes_up(),
            KeyCode::Down => self.scroll_notes_down(),
            KeyCode::Backspace => {
                let mut draft = self.board.draft.clone();
                if draft.pop().is_some() {
                    self.dispatch(Action::DraftChanged(draft));
                }
            }
            // AltGr arrives as Ctrl+Alt on Windows
            KeyCode::Char(c)
                if modifiers.contains(KeyModifiers::CONTROL)
                    == modifiers.contains(KeyModifiers::ALT) =>
            {
                let mut draft = self.board.draft.clone();
                draft.push(c);
                self.dispatch(Action::DraftChanged(draft));
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(day) = self.grid().day_at(self.layout.calendar, mouse.column, mouse.row) {
                    self.cursor = day.date();
                    self.focus = Focus::Calendar;
                    self.tap(day);
                } else if let Some(board) = self.layout.board {
                    if board.add_button.contains(pos) {
                        self.submit();
                    } else if board.input.contains(pos) {
                        self.focus_input();
                    }
                }
            }
            MouseEventKind::ScrollUp if self.layout.calendar.contains(pos) => self.prev_month(),
            MouseEventKind::ScrollDown if self.layout.calendar.contains(pos) => self.next_month(),
            MouseEventKind::ScrollUp if self.over_notes(pos) => self.scroll_notes_up(),
            MouseEventKind::ScrollDown if self.over_notes(pos) => self.scroll_notes_down(),
            _ => {}
        }
    }

    /// The calendar reported a tap on `day`.
    pub fn tap(&mut self, day: DateKey) {
        if self.board.selection != Some(day) {
            self.notes_scroll = 0;
        }
        self.dispatch(Action::DayTap(day));
    }

    pub fn submit(&mut self) {
        let before = self.board.store.note_count();
        self.dispatch(Action::AddEvent);
        if self.board.store.note_count() > before {
            if let Some(date) = self.board.selection {
                self.status_message = Some(format!("Added note to {}", date));
            }
            // follow the newest note
            self.notes_scroll = usize::MAX;
        }
    }

    fn over_notes(&self, pos: Position) -> bool {
        self.layout.board.is_some_and(|board| board.list.contains(pos))
    }

    fn max_notes_scroll(&self) -> usize {
        let list = self.layout.board.map(|board| board.list).unwrap_or_default();
        max_scroll(self.board.selected_notes().len(), list)
    }

    pub fn scroll_notes_up(&mut self) {
        self.notes_scroll = self.notes_scroll.min(self.max_notes_scroll()).saturating_sub(1);
    }

    pub fn scroll_notes_down(&mut self) {
        self.notes_scroll = self.notes_scroll.saturating_add(1).min(self.max_notes_scroll());
    }

    pub fn focus_input(&mut self) {
        if self.board.selection.is_some() {
            self.focus = Focus::Input;
        } else {
            debug!("input focus requested without a selected day");
            self.status_message = Some("Select a day first".to_string());
        }
    }

    pub fn quit(&mut self) {
        info!(
            days = self.board.store.day_count(),
            notes = self.board.store.note_count(),
            "quitting"
        );
        self.running = false;
    }

    pub fn next_day(&mut self) {
        self.cursor = self.cursor.succ_opt().unwrap_or(self.cursor);
    }

    pub fn prev_day(&mut self) {
        self.cursor = self.cursor.pred_opt().unwrap_or(self.cursor);
    }

    pub fn next_week(&mut self) {
        self.cursor = self.cursor.checked_add_days(Days::new(7)).unwrap_or(self.cursor);
    }

    pub fn prev_week(&mut self) {
        self.cursor = self.cursor.checked_sub_days(Days::new(7)).unwrap_or(self.cursor);
    }

    /// Move a month forward, clamping the day to the month's length.
    pub fn next_month(&mut self) {
        self.cursor = self.cursor.checked_add_months(Months::new(1)).unwrap_or(self.cursor);
    }

    pub fn prev_month(&mut self) {
        self.cursor = self.cursor.checked_sub_months(Months::new(1)).unwrap_or(self.cursor);
    }

    pub fn go_to_today(&mut self) {
        self.cursor = self.today;
    }
}
