//! The console command loop.

use crate::commands::{self, Command};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::terminal::TerminalRenderer;
use roster_engine::{EventKind, EventTable, Session, Store};
use std::io::{BufRead, Write};

/// Build the initial store from the configured seed file or the built-in seed.
pub fn load_store(config: &Config) -> Result<Store> {
    match &config.seed_file {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| AppError::SeedFile {
                path: path.clone(),
                source,
            })?;
            let store = Store::from_json(&json)?;
            tracing::info!(path = %path.display(), records = store.len(), "loaded seed file");
            Ok(store)
        }
        None => Ok(Store::seeded()),
    }
}

/// Run the command loop until `quit` or end of input.
pub fn run<I, W>(config: &Config, store: Store, input: I, output: W) -> Result<W>
where
    I: BufRead,
    W: Write,
{
    let table = EventTable::new();
    let mut session = Session::new(store);
    let mut renderer = TerminalRenderer::new(output, config.column_width);

    table.dispatch_kind(&mut session, &mut renderer, EventKind::FirstLoad, None)?;
    check(&mut renderer)?;

    for line in input.lines() {
        let line = line?;
        match commands::parse(&line) {
            Ok(Command::Event { kind, value }) => {
                if let Err(e) =
                    table.dispatch_kind(&mut session, &mut renderer, kind, value.as_deref())
                {
                    tracing::debug!(event = %kind, error = %e, "action rejected");
                    renderer.message(&format!("Error: {}", e));
                }
            }
            Ok(Command::SetField(field, value)) => {
                if renderer.form_visible() {
                    renderer.set_field(field, value);
                } else {
                    renderer.message("Error: the form is not open");
                }
            }
            Ok(Command::Help) => renderer.message(commands::HELP),
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {}
            Err(e) => renderer.message(&format!("Error: {}", e)),
        }
        check(&mut renderer)?;
    }

    tracing::info!(records = session.store().len(), "session closed");
    Ok(renderer.into_inner())
}

fn check<W: Write>(renderer: &mut TerminalRenderer<W>) -> Result<()> {
    match renderer.take_error() {
        Some(e) => Err(AppError::Io(e)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn run_script(script: &str) -> String {
        let out = run(
            &Config::default(),
            Store::seeded(),
            Cursor::new(script.to_string()),
            Vec::new(),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn first_load_prints_seed() {
        let out = run_script("");
        assert!(out.contains("Roberto"));
        assert!(out.contains("Priegos"));
        assert!(out.contains("Actions: insert\n"));
    }

    #[test]
    fn search_filters_table() {
        let out = run_script("search arm\nquit\n");
        let after = out.split("Actions: insert\n").nth(1).unwrap();
        assert!(after.contains("Aurelia"));
        assert!(!after.contains("Roberto"));
    }

    #[test]
    fn insert_through_form() {
        let out = run_script("insert\nname Ana\nsurname Lopez\nemail al@mail.com\nsave\n");
        assert!(out.contains("Actions: none"));
        let last_table = out.rsplit("ID ").next().unwrap();
        assert!(last_table.contains("4"));
        assert!(last_table.contains("Ana"));
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let out = run_script("update\nselect x\nname Bob\ndance\nselect 2\nremove\n");
        assert!(out.contains("Error: no record selected"));
        assert!(out.contains("Error: invalid input"));
        assert!(out.contains("Error: the form is not open"));
        assert!(out.contains("Error: unknown command 'dance'"));
        let last_table = out.rsplit("ID ").next().unwrap();
        assert!(!last_table.contains("Aurelia"));
    }

    #[test]
    fn quit_stops_reading() {
        let out = run_script("quit\nremove\n");
        assert!(!out.contains("Error"));
    }

    #[test]
    fn missing_seed_file() {
        let config = Config {
            seed_file: Some(PathBuf::from("/nonexistent/roster/seed.json")),
            ..Config::default()
        };
        assert!(matches!(load_store(&config), Err(AppError::SeedFile { .. })));
    }

    #[test]
    fn default_seed() {
        let store = load_store(&Config::default()).unwrap();
        assert_eq!(store, Store::seeded());
    }
}
