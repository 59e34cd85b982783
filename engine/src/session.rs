//! Session - the action handlers.
//!
//! A [`Session`] owns the [`Store`] and the [`AppState`]. Each handler runs
//! to completion: it checks its precondition, mutates state, recomputes the
//! filtered view when the store or search changed, and only then drives the
//! renderer. A handler that fails leaves state untouched.

use crate::{error::Result, view, AppState, Error, Record, Renderer, Store, UserData, NO_RECORD};
use tracing::{debug, warn};

/// One UI session: the record store plus its transient state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: Store,
    state: AppState,
}

impl Session {
    /// Create a session over an existing store.
    ///
    /// The view stays empty until [`Session::first_load`] runs.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            state: AppState::new(),
        }
    }

    /// Create a session over the built-in seed records.
    pub fn seeded() -> Self {
        Self::new(Store::seeded())
    }

    /// The authoritative record store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Direct store access outside the action handlers.
    ///
    /// Neither the filtered view nor the selection follow changes made here
    /// until the next handler recomputes them.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Search, selection and the filtered view.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Initial draw: full store, empty search, nothing selected.
    pub fn first_load<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        self.state.set_search("");
        self.state.clear_selection();
        self.state.set_form_visible(false);
        self.state.refresh(&self.store);
        debug!(records = self.state.view().len(), "first load");

        renderer.render_table(self.state.view());
        renderer.hide_form();
        renderer.apply_controls(self.state.controls());
        Ok(())
    }

    /// Apply a new search and redraw.
    ///
    /// An open form is discarded since the selection it was editing is reset.
    pub fn search_submit<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        text: &str,
    ) -> Result<()> {
        if self.state.form_visible() {
            self.close_form(renderer);
        }

        self.state.set_search(text);
        self.state.clear_selection();
        self.state.refresh(&self.store);
        debug!(search = self.state.search(), matches = self.state.view().len(), "search");

        renderer.render_table(self.state.view());
        renderer.apply_controls(self.state.controls());
        Ok(())
    }

    /// Select a row from its raw radio value.
    pub fn row_selected<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        raw: &str,
    ) -> Result<()> {
        if self.state.form_visible() {
            return Err(Error::FormOpen);
        }

        let previous = self.state.selected_id();
        let id = self.state.set_selected_id(raw)?;
        if id != NO_RECORD && view::selected(self.state.view(), id).is_none() {
            self.state.select(previous);
            return Err(Error::RecordNotFound(id));
        }

        debug!(id, "row selected");
        renderer.apply_controls(self.state.controls());
        Ok(())
    }

    /// Open an empty form for a new record.
    pub fn insert_click<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        if self.state.form_visible() {
            return Err(Error::FormOpen);
        }

        self.state.clear_selection();
        self.open_form(renderer, UserData::default());
        Ok(())
    }

    /// Open the form pre-filled with the selected record.
    pub fn update_click<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        if self.state.form_visible() {
            return Err(Error::FormOpen);
        }
        if !self.state.has_selection() {
            return Err(Error::NothingSelected);
        }

        let fields = self
            .state
            .selected()
            .map(Record::data)
            .unwrap_or_default();
        self.open_form(renderer, fields);
        Ok(())
    }

    /// Remove the selected record and redraw.
    pub fn remove_click<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        if self.state.form_visible() {
            return Err(Error::FormOpen);
        }
        if !self.state.has_selection() {
            return Err(Error::NothingSelected);
        }

        let id = self.state.selected_id();
        match self.store.remove(id) {
            Ok(_) => debug!(id, "record removed"),
            Err(e) if e.is_not_found() => warn!(id, "remove target missing, ignoring"),
            Err(e) => return Err(e),
        }

        self.state.clear_selection();
        self.refresh_and_redraw(renderer);
        Ok(())
    }

    /// Close the form without saving.
    pub fn cancel_click<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        if !self.state.form_visible() {
            return Err(Error::FormHidden);
        }

        self.close_form(renderer);
        renderer.apply_controls(self.state.controls());
        Ok(())
    }

    /// Save the form as a new record or over the selected one, then redraw.
    pub fn form_submit<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        if !self.state.form_visible() {
            return Err(Error::FormHidden);
        }

        let record = Record::from_data(self.state.selected_id(), renderer.read_form_fields());
        let id = record.id;
        let inserted = record.is_new();
        match self.store.upsert(record) {
            Ok(saved) => debug!(id = saved, inserted, "record saved"),
            Err(e) if e.is_not_found() => warn!(id, "update target missing, ignoring"),
            Err(e) => return Err(e),
        }

        self.state.clear_selection();
        self.close_form(renderer);
        self.refresh_and_redraw(renderer);
        Ok(())
    }

    fn open_form<R: Renderer + ?Sized>(&mut self, renderer: &mut R, fields: UserData) {
        self.state.set_form_visible(true);
        renderer.apply_controls(self.state.controls());
        renderer.load_form_fields(&fields);
        renderer.show_form();
    }

    fn close_form<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.state.set_form_visible(false);
        renderer.hide_form();
        renderer.clear_form_fields();
    }

    fn refresh_and_redraw<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.state.refresh(&self.store);
        renderer.render_table(self.state.view());
        renderer.apply_controls(self.state.controls());
    }
}
