use std::collections::BTreeMap;

use tracing::debug;

use super::date_key::DateKey;
use super::store::EventStore;

/// How the calendar should decorate a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marking {
    pub selected: bool,
}

pub type MarkedDates = BTreeMap<DateKey, Marking>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The calendar reported a tap on a day.
    DayTap(DateKey),
    /// The input row's text changed.
    DraftChanged(String),
    /// The submit control was triggered.
    AddEvent,
}

/// Everything the event board owns. Created empty, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub selection: Option<DateKey>,
    pub draft: String,
    pub store: EventStore,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes for the selected day, or nothing without a selection.
    pub fn selected_notes(&self) -> &[String] {
        match self.selection {
            Some(date) => self.store.notes_for(date),
            None => &[],
        }
    }

    /// Dates the calendar should mark: exactly the selection, if any.
    pub fn marked_dates(&self) -> MarkedDates {
        self.selection
            .map(|date| (date, Marking { selected: true }))
            .into_iter()
            .collect()
    }

    pub fn can_add(&self) -> bool {
        self.selection.is_some() && !self.draft.is_empty()
    }
}

/// Apply one action and return the next state.
pub fn reduce(mut state: BoardState, action: Action) -> BoardState {
    match action {
        Action::DayTap(date) => {
            debug!(%date, "day tapped");
            state.selection = Some(date);
        }
        Action::DraftChanged(text) => {
            state.draft = text;
        }
        Action::AddEvent => match state.selection {
            Some(date) if !state.draft.is_empty() => {
                let note = std::mem::take(&mut state.draft);
                debug!(
                    %date,
                    len = note.len(),
                    first_for_day = !state.store.contains(date),
                    "note added"
                );
                state.store.append(date, note);
            }
            selection => {
                debug!(
                    has_selection = selection.is_some(),
                    draft_empty = state.draft.is_empty(),
                    "add ignored"
                );
            }
        },
    }
    state
}
