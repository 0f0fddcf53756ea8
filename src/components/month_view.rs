use chrono::{Datelike, NaiveDate, Weekday};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::board::{DateKey, MarkedDates};
use crate::config::WeekStart;
use crate::theme;

const CELL_WIDTH: u16 = 5;

/// Smallest area that shows a six-week month without clipping.
pub const WIDTH: u16 = CELL_WIDTH * 7 + 2;
pub const HEIGHT: u16 = 1 + 6 + 2;

/// One week row; `None` pads days outside the displayed month.
pub type Week = [Option<NaiveDate>; 7];

/// What the calendar shows: the cursor's month, laid out from `week_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: NaiveDate,
    pub today: NaiveDate,
    pub week_start: WeekStart,
    pub focused: bool,
}

impl MonthGrid {
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.week_start.weekday(); 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    pub fn weeks(&self) -> Vec<Week> {
        let first = self.cursor.with_day(1).unwrap_or(self.cursor);
        let start = self.week_start.weekday().num_days_from_sunday();
        let mut col = ((first.weekday().num_days_from_sunday() + 7 - start) % 7) as usize;

        let mut weeks = Vec::with_capacity(6);
        let mut week: Week = [None; 7];
        for date in first.iter_days().take_while(|d| d.month() == first.month()) {
            week[col] = Some(date);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }

    /// The day drawn at terminal cell (`column`, `row`) when rendered into `area`.
    pub fn day_at(&self, area: Rect, column: u16, row: u16) -> Option<DateKey> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        // first inner row is the weekday header
        if column < inner.x || column >= inner.right() || row <= inner.y || row >= inner.bottom() {
            return None;
        }
        let col = usize::from((column - inner.x) / CELL_WIDTH);
        let week = usize::from(row - inner.y - 1);
        self.weeks()
            .get(week)?
            .get(col)
            .copied()
            .flatten()
            .map(DateKey::from)
    }
}

pub struct MonthView;

impl MonthView {
    pub fn render(frame: &mut Frame, area: Rect, grid: &MonthGrid, marked: &MarkedDates) {
        let theme = theme::current();
        let title = format!(" {} ", grid.cursor.format("%B %Y"));

        let border_style = if grid.focused { theme.accent } else { theme.border };
        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = Line::from(
            grid.weekdays()
                .iter()
                .map(|d| Span::styled(format!("{:^5}", short_name(*d)), theme.header))
                .collect::<Vec<_>>(),
        );

        let mut lines = vec![header];
        for week in grid.weeks() {
            let cells: Vec<Span> = week
                .iter()
                .map(|cell| match cell {
                    None => Span::raw(" ".repeat(usize::from(CELL_WIDTH))),
                    Some(date) => {
                        let key = DateKey::from(*date);
                        let selected = marked.get(&key).is_some_and(|m| m.selected);
                        let style = day_style(*date, grid, selected);
                        Span::styled(format!(" {:>2}  ", date.day()), style)
                    }
                })
                .collect();
            lines.push(Line::from(cells));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn day_style(date: NaiveDate, grid: &MonthGrid, selected: bool) -> Style {
    let theme = theme::current();
    let is_cursor = grid.focused && date == grid.cursor;

    match (selected, is_cursor) {
        (true, true) => theme.selected.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        (true, false) => theme.selected,
        (false, true) if date == grid.today => theme.today.patch(theme.cursor),
        (false, true) => theme.cursor,
        (false, false) if date == grid.today => theme.today,
        (false, false) => Style::default(),
    }
}

fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}
