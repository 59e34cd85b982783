//! # Roster Engine
//!
//! The state and derived-view model of a small record manager.
//!
//! This crate holds an in-memory list of user records and the transient UI
//! state around it: the search text, the selected record and the filtered view
//! shown in the table. User actions go through handlers that mutate state,
//! recompute the view and then drive a [`Renderer`].
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never draws or reads input itself
//! - **Synchronous**: every handler runs to completion before the next
//! - **Derived views**: the filtered view is a cache, recomputed after every
//!   store or search change and before any redraw
//! - **Owned state**: a [`Session`] is passed by reference, never global
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A [`Record`] is a person entry with a numeric id and three text fields.
//! Id `0` is reserved and means "no record". The [`Store`] assigns ids on
//! insert as the highest existing id plus one.
//!
//! ### Derived views
//!
//! [`view::filter`] keeps the records whose name, surname or email contains
//! the search text ignoring case. [`view::selected`] finds the selected record
//! in a view.
//!
//! ### Actions
//!
//! [`Session`] exposes one handler per user action. Raw UI events are mapped
//! to those handlers by an [`EventTable`] built once at startup.
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_engine::{EventTable, RecordingRenderer, Session, UserData};
//!
//! let table = EventTable::new();
//! let mut session = Session::seeded();
//! let mut renderer = RecordingRenderer::new();
//!
//! table.dispatch(&mut session, &mut renderer, "first-load", None).unwrap();
//! assert_eq!(renderer.row_ids(), vec![1, 2, 3]);
//!
//! // Add a record through the form
//! table.dispatch(&mut session, &mut renderer, "insert-click", None).unwrap();
//! renderer.type_into_form(UserData::new("X", "Y", "z@m.com"));
//! table.dispatch(&mut session, &mut renderer, "form-submit", None).unwrap();
//! assert_eq!(renderer.row_ids(), vec![1, 2, 3, 4]);
//!
//! // Search
//! table
//!     .dispatch(&mut session, &mut renderer, "search-submit", Some("arm"))
//!     .unwrap();
//! assert_eq!(renderer.row_ids(), vec![2]);
//! ```

pub mod error;
pub mod events;
pub mod record;
pub mod renderer;
pub mod seed;
pub mod session;
pub mod state;
pub mod store;
pub mod view;

// Re-export main types at crate root
pub use error::{Error, Result};
pub use events::{EventKind, EventTable, Handler};
pub use record::{parse_record_id, Record, UserData};
pub use renderer::{Controls, RecordingRenderer, RenderCall, Renderer};
pub use session::Session;
pub use state::AppState;
pub use store::Store;

/// Record identifier.
pub type RecordId = u64;

/// Reserved id meaning "no record" or "not yet stored".
pub const NO_RECORD: RecordId = 0;
