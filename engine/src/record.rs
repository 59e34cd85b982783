//! Record types for user entries.

use crate::{Error, RecordId, Result, NO_RECORD};
use serde::{Deserialize, Serialize};

/// The editable fields of a record, as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl UserData {
    /// Create user data from its three text fields.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    /// Check if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.surname.is_empty() && self.email.is_empty()
    }
}

/// A user record in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, `0` for a record not yet stored
    pub id: RecordId,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl Record {
    /// Create a record with the given id.
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    /// Build a record from form data.
    pub fn from_data(id: RecordId, data: UserData) -> Self {
        Self {
            id,
            name: data.name,
            surname: data.surname,
            email: data.email,
        }
    }

    /// Check if this record has not been assigned an id yet.
    pub fn is_new(&self) -> bool {
        self.id == NO_RECORD
    }

    /// Copy out the editable fields.
    pub fn data(&self) -> UserData {
        UserData::new(&self.name, &self.surname, &self.email)
    }

    /// Check if any text field contains `needle` ignoring case.
    ///
    /// `needle` must already be lowercase; an empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || [&self.name, &self.surname, &self.email]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Parse a raw id value coming from the UI.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer fitting a [`RecordId`] is rejected.
pub fn parse_record_id(raw: &str) -> Result<RecordId> {
    raw.trim()
        .parse::<RecordId>()
        .map_err(|_| Error::InvalidInput(format!("expected a record id, got '{}'", raw)))
}
