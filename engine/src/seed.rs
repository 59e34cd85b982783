//! Built-in seed data.

use crate::Record;

/// The records a fresh session starts with.
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new(1, "Roberto", "Gomez", "rgomez@mail.com"),
        Record::new(2, "Aurelia", "Armas", "aarmas@mail.com"),
        Record::new(3, "Priegos", "Ruros", "pruros@mail.com"),
    ]
}
