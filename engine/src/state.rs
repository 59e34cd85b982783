//! Transient UI state: search text, selection, form visibility and the
//! filtered view cache.

use crate::{
    parse_record_id, renderer::Controls, view, Record, RecordId, Result, Store, NO_RECORD,
};

/// Application state for one UI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    search: String,
    selected_id: RecordId,
    view: Vec<Record>,
    form_visible: bool,
}

impl AppState {
    /// Create a state with no search, no selection and an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text, always lowercase.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Set the search text. Does not recompute the view.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_lowercase();
    }

    /// Currently selected id, `0` when nothing is selected.
    pub fn selected_id(&self) -> RecordId {
        self.selected_id
    }

    /// Check if a record is selected.
    pub fn has_selection(&self) -> bool {
        self.selected_id != NO_RECORD
    }

    /// Set the selection from a raw UI value.
    ///
    /// The state is left untouched when the value is not a valid id.
    pub fn set_selected_id(&mut self, raw: &str) -> Result<RecordId> {
        let id = parse_record_id(raw)?;
        self.selected_id = id;
        Ok(id)
    }

    /// Set the selection from an already typed id.
    pub fn select(&mut self, id: RecordId) {
        self.selected_id = id;
    }

    /// Reset the selection to "nothing selected".
    pub fn clear_selection(&mut self) {
        self.selected_id = NO_RECORD;
    }

    /// The filtered view as of the last [`AppState::refresh`].
    pub fn view(&self) -> &[Record] {
        &self.view
    }

    /// Recompute the filtered view from the store and current search.
    pub fn refresh(&mut self, store: &Store) {
        self.view = view::filter(store.records(), &self.search);
    }

    /// The selected record, if it is in the current view.
    pub fn selected(&self) -> Option<&Record> {
        view::selected(&self.view, self.selected_id)
    }

    /// Check if the record form is shown.
    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    /// Record whether the form is shown.
    pub fn set_form_visible(&mut self, visible: bool) {
        self.form_visible = visible;
    }

    /// Which controls should be enabled right now.
    pub fn controls(&self) -> Controls {
        if self.form_visible {
            Controls::disabled()
        } else {
            Controls::for_selection(self.selected_id)
        }
    }
}
