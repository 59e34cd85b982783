//! The view renderer contract.
//!
//! The engine never draws anything itself. Handlers drive a [`Renderer`]
//! after every state change; the renderer only reads what it is given.

use crate::{Record, RecordId, UserData, NO_RECORD};

/// Enabled state of the three record controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub insert: bool,
    pub update: bool,
    pub remove: bool,
}

impl Controls {
    /// Insert is always available; update and remove need a selection.
    pub fn for_selection(selected_id: RecordId) -> Self {
        let selected = selected_id != NO_RECORD;
        Self {
            insert: true,
            update: selected,
            remove: selected,
        }
    }

    /// Every control disabled, used while the form is open.
    pub fn disabled() -> Self {
        Self {
            insert: false,
            update: false,
            remove: false,
        }
    }
}

/// A view renderer driven by the action handlers.
pub trait Renderer {
    /// Draw one selectable row per record, or a "no data" row when empty.
    fn render_table(&mut self, view: &[Record]);

    fn set_controls_enabled(&mut self, insert: bool, update: bool, remove: bool);

    fn show_form(&mut self);

    fn hide_form(&mut self);

    /// Fill the form inputs.
    fn load_form_fields(&mut self, fields: &UserData);

    /// Read back what the operator typed into the form.
    fn read_form_fields(&self) -> UserData;

    fn clear_form_fields(&mut self);

    /// Apply a [`Controls`] value.
    fn apply_controls(&mut self, controls: Controls) {
        self.set_controls_enabled(controls.insert, controls.update, controls.remove);
    }
}

/// A renderer call captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Table(Vec<RecordId>),
    Controls(Controls),
    ShowForm,
    HideForm,
    LoadForm(UserData),
    ClearForm,
}

/// Headless renderer that records every call and keeps the last drawn state.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
    pub table: Vec<Record>,
    pub controls: Option<Controls>,
    pub form_visible: bool,
    pub form: UserData,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the operator typing into the form.
    pub fn type_into_form(&mut self, fields: UserData) {
        self.form = fields;
    }

    /// Ids of the rows currently drawn.
    pub fn row_ids(&self) -> Vec<RecordId> {
        self.table.iter().map(|r| r.id).collect()
    }

    /// Number of full table redraws so far.
    pub fn redraws(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RenderCall::Table(_)))
            .count()
    }

    /// Forget recorded calls, keeping the drawn state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render_table(&mut self, view: &[Record]) {
        self.table = view.to_vec();
        self.calls
            .push(RenderCall::Table(view.iter().map(|r| r.id).collect()));
    }

    fn set_controls_enabled(&mut self, insert: bool, update: bool, remove: bool) {
        let controls = Controls {
            insert,
            update,
            remove,
        };
        self.controls = Some(controls);
        self.calls.push(RenderCall::Controls(controls));
    }

    fn show_form(&mut self) {
        self.form_visible = true;
        self.calls.push(RenderCall::ShowForm);
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
        self.calls.push(RenderCall::HideForm);
    }

    fn load_form_fields(&mut self, fields: &UserData) {
        self.form = fields.clone();
        self.calls.push(RenderCall::LoadForm(fields.clone()));
    }

    fn read_form_fields(&self) -> UserData {
        self.form.clone()
    }

    fn clear_form_fields(&mut self) {
        self.form = UserData::default();
        self.calls.push(RenderCall::ClearForm);
    }
}
