use std::collections::BTreeMap;

use super::date_key::DateKey;

/// Notes per day, in the order they were added.
///
/// A day only appears once it holds at least one note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    notes: BTreeMap<DateKey, Vec<String>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note to the end of `date`'s sequence, creating it if needed.
    pub fn append(&mut self, date: DateKey, note: String) {
        self.notes.entry(date).or_default().push(note);
    }

    /// Notes for `date`; empty when nothing was added for it.
    pub fn notes_for(&self, date: DateKey) -> &[String] {
        self.notes.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `date` holds at least one note.
    pub fn contains(&self, date: DateKey) -> bool {
        self.notes.contains_key(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of days holding notes.
    pub fn day_count(&self) -> usize {
        self.notes.len()
    }

    /// Total number of notes across all days.
    pub fn note_count(&self) -> usize {
        self.notes.values().map(Vec::len).sum()
    }
}
