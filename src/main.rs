mod app;
mod board;
mod components;
mod config;
mod event;
mod logging;
mod theme;
mod tui;

use std::time::Duration;

use app::App;
use chrono::Local;
use color_eyre::Result;
use config::Config;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use tracing::{info, warn};

use components::{month_view, BoardLayout, EventBoard, Help, MonthView, StatusBar};

fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let _log_guard = match logging::init(&config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };
    info!("calendar-notes started");
    if let Some(e) = config_error {
        eprintln!("Ignoring config: {e}");
        warn!(error = ?e, "using default config");
    }

    theme::install(config.theme.into_theme());
    let mut app = App::new(Local::now().date_naive(), config.week_start);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.today = Local::now().date_naive();
        terminal.draw(|frame| draw(frame, app))?;

        if let Some(input) = event::next_input_event(Duration::from_millis(250))? {
            app.handle_event(input);
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: content + status bar
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
    let (calendar_area, board_area) = split_content(layout[0]);

    MonthView::render(frame, calendar_area, &app.grid(), &app.board.marked_dates());
    EventBoard::render(
        frame,
        board_area,
        &app.board,
        app.focus == app::Focus::Input,
        app.notes_scroll,
    );

    app.layout.calendar = calendar_area;
    app.layout.board = app.board.selection.map(|_| BoardLayout::new(board_area));

    StatusBar::render(
        frame,
        layout[1],
        app.focus,
        app.board.selection,
        app.board.selected_notes().len(),
        app.status_message.as_deref(),
    );

    if app.show_help {
        Help::render(frame, area);
    }
}

/// Calendar beside the board on wide terminals, above it on narrow ones.
fn split_content(area: Rect) -> (Rect, Rect) {
    if area.width >= month_view::WIDTH + 24 {
        let columns = Layout::horizontal([
            Constraint::Length(month_view::WIDTH),
            Constraint::Fill(1),
        ])
        .split(area);
        let calendar = Layout::vertical([
            Constraint::Length(month_view::HEIGHT),
            Constraint::Fill(1),
        ])
        .split(columns[0]);
        (calendar[0], columns[1])
    } else {
        let rows = Layout::vertical([
            Constraint::Length(month_view::HEIGHT),
            Constraint::Fill(1),
        ])
        .split(area);
        (rows[0], rows[1])
    }
}
