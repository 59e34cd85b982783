//! Operator command parsing.
//!
//! Each input line becomes a [`Command`]. Commands that stand for a UI event
//! carry the raw event name the engine's event table resolves.

use roster_engine::EventKind;

/// Editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Surname,
    Email,
}

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward a UI event to the session
    Event {
        kind: EventKind,
        value: Option<String>,
    },
    /// Type into a form field
    SetField(Field, String),
    Help,
    Quit,
    /// Blank line
    Nothing,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
Commands:
  search [text]       filter the table (empty text shows everything)
  select <id>         select a row
  insert              open an empty form
  update              open the form with the selected row
  remove              remove the selected row
  name <value>        set the form's name
  surname <value>     set the form's surname
  email <value>       set the form's email
  save                submit the form
  cancel              close the form without saving
  help                show this list
  quit                exit";

fn event(kind: EventKind) -> Command {
    Command::Event { kind, value: None }
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => Command::Nothing,
        "search" | "find" => Command::Event {
            kind: EventKind::SearchSubmit,
            value: Some(rest.to_string()),
        },
        "select" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("select"));
            }
            Command::Event {
                kind: EventKind::RowSelected,
                value: Some(rest.to_string()),
            }
        }
        "insert" | "new" => event(EventKind::InsertClick),
        "update" | "edit" => event(EventKind::UpdateClick),
        "remove" | "delete" => event(EventKind::RemoveClick),
        "cancel" => event(EventKind::CancelClick),
        "save" | "submit" => event(EventKind::FormSubmit),
        "name" => Command::SetField(Field::Name, rest.to_string()),
        "surname" => Command::SetField(Field::Surname, rest.to_string()),
        "email" => Command::SetField(Field::Email, rest.to_string()),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::Unknown(word.to_string())),
    };
    Ok(command)
}
