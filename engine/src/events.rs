//! Event table mapping raw UI events to session handlers.
//!
//! Renderers report raw events by name (`"search-submit"`, `"insert-click"`,
//! ...). The [`EventTable`] is built once and resolves each name to its
//! handler before calling it.

use crate::{error::Result, Error, Renderer, Session};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The user actions the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SearchSubmit,
    RowSelected,
    InsertClick,
    UpdateClick,
    RemoveClick,
    CancelClick,
    FormSubmit,
    FirstLoad,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::SearchSubmit,
        EventKind::RowSelected,
        EventKind::InsertClick,
        EventKind::UpdateClick,
        EventKind::RemoveClick,
        EventKind::CancelClick,
        EventKind::FormSubmit,
        EventKind::FirstLoad,
    ];

    /// Raw event name as reported by renderers.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::SearchSubmit => "search-submit",
            EventKind::RowSelected => "radio-selected",
            EventKind::InsertClick => "insert-click",
            EventKind::UpdateClick => "update-click",
            EventKind::RemoveClick => "remove-click",
            EventKind::CancelClick => "cancel-click",
            EventKind::FormSubmit => "form-submit",
            EventKind::FirstLoad => "first-load",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownEvent(s.to_string()))
    }
}

/// A handler entry in the table.
pub type Handler = fn(&mut Session, &mut dyn Renderer, Option<&str>) -> Result<()>;

fn required(kind: EventKind, value: Option<&str>) -> Result<&str> {
    value.ok_or(Error::MissingPayload(kind.name()))
}

fn on_search_submit(s: &mut Session, r: &mut dyn Renderer, value: Option<&str>) -> Result<()> {
    s.search_submit(r, required(EventKind::SearchSubmit, value)?)
}

fn on_row_selected(s: &mut Session, r: &mut dyn Renderer, value: Option<&str>) -> Result<()> {
    s.row_selected(r, required(EventKind::RowSelected, value)?)
}

fn on_insert_click(s: &mut Session, r: &mut dyn Renderer, _: Option<&str>) -> Result<()> {
    s.insert_click(r)
}

fn on_update_click(s: &mut Session, r: &mut dyn Renderer, _: Option<&str>) -> Result<()> {
    s.update_click(r)
}

fn on_remove_click(s: &mut Session, r: &mut dyn Renderer, _: Option<&str>) -> Result<()> {
    s.remove_click(r)
}

fn on_cancel_click(s: &mut Session, r: &mut dyn Renderer, _: Option<&str>) -> Result<()> {
    s.cancel_click(r)
}

fn on_form_submit(s: &mut Session, r: &mut dyn Renderer, _: Option<&str>) -> Result<()> {
    s.form_submit(r)
}

fn on_first_load(s: &mut Session, r: &mut dyn Renderer, _: Option<&str>) -> Result<()> {
    s.first_load(r)
}

/// Resolved event name to handler mapping.
#[derive(Clone)]
pub struct EventTable {
    handlers: HashMap<EventKind, Handler>,
}

impl Default for EventTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTable {
    /// Build the table with every handler registered.
    pub fn new() -> Self {
        let entries: [(EventKind, Handler); 8] = [
            (EventKind::SearchSubmit, on_search_submit),
            (EventKind::RowSelected, on_row_selected),
            (EventKind::InsertClick, on_insert_click),
            (EventKind::UpdateClick, on_update_click),
            (EventKind::RemoveClick, on_remove_click),
            (EventKind::CancelClick, on_cancel_click),
            (EventKind::FormSubmit, on_form_submit),
            (EventKind::FirstLoad, on_first_load),
        ];

        Self {
            handlers: entries.into_iter().collect(),
        }
    }

    /// Look up the handler for a kind.
    pub fn handler(&self, kind: EventKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }

    /// Resolve a raw event name and run its handler.
    pub fn dispatch(
        &self,
        session: &mut Session,
        renderer: &mut dyn Renderer,
        name: &str,
        value: Option<&str>,
    ) -> Result<()> {
        let kind: EventKind = name.parse()?;
        self.dispatch_kind(session, renderer, kind, value)
    }

    /// Run the handler for an already resolved kind.
    pub fn dispatch_kind(
        &self,
        session: &mut Session,
        renderer: &mut dyn Renderer,
        kind: EventKind,
        value: Option<&str>,
    ) -> Result<()> {
        let handler = self
            .handler(kind)
            .ok_or_else(|| Error::UnknownEvent(kind.name().to_string()))?;
        tracing::debug!(event = %kind, "dispatch");
        handler(session, renderer, value)
    }
}

impl fmt::Debug for EventTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.handlers.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("EventTable").field("events", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingRenderer;

    #[test]
    fn names_roundtrip() {
        for kind in EventKind::ALL {
            assert_eq!(kind.name().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name() {
        let result = "double-click".parse::<EventKind>();
        assert_eq!(result, Err(Error::UnknownEvent("double-click".into())));
    }

    #[test]
    fn every_kind_registered() {
        let table = EventTable::new();
        for kind in EventKind::ALL {
            assert!(table.handler(kind).is_some(), "missing {}", kind);
        }
    }

    #[test]
    fn dispatch_by_name() {
        let table = EventTable::new();
        let mut session = Session::seeded();
        let mut renderer = RecordingRenderer::new();

        table
            .dispatch(&mut session, &mut renderer, "first-load", None)
            .unwrap();
        table
            .dispatch(&mut session, &mut renderer, "search-submit", Some("Gom"))
            .unwrap();

        assert_eq!(renderer.row_ids(), vec![1]);
    }

    #[test]
    fn dispatch_requires_payload() {
        let table = EventTable::new();
        let mut session = Session::seeded();
        let mut renderer = RecordingRenderer::new();

        let result = table.dispatch(&mut session, &mut renderer, "radio-selected", None);
        assert_eq!(result, Err(Error::MissingPayload("radio-selected")));
    }

    #[test]
    fn dispatch_unknown_leaves_state() {
        let table = EventTable::new();
        let mut session = Session::seeded();
        let mut renderer = RecordingRenderer::new();

        let result = table.dispatch(&mut session, &mut renderer, "drag", Some("1"));
        assert!(matches!(result, Err(Error::UnknownEvent(_))));
        assert!(renderer.calls.is_empty());
    }
}
