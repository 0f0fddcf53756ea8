pub mod date_key;
pub mod state;
pub mod store;

pub use date_key::DateKey;
pub use state::{reduce, Action, BoardState, MarkedDates};
