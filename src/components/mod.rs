pub mod event_board;
pub mod help;
pub mod month_view;
pub mod status_bar;

pub use event_board::{BoardLayout, EventBoard};
pub use help::Help;
pub use month_view::{MonthGrid, MonthView};
pub use status_bar::StatusBar;
