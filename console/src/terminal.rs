//! Line-oriented terminal renderer.

use crate::commands::Field;
use roster_engine::{Record, Renderer, UserData};
use std::io::{self, Write};

const HEADERS: [&str; 4] = ["ID", "Name", "Surname", "Email"];
const NO_DATA: &str = "No data";

/// Renders the table, controls and form as plain text lines.
///
/// Write failures are kept and reported through [`TerminalRenderer::take_error`]
/// since the renderer contract has no error channel.
pub struct TerminalRenderer<W: Write> {
    out: W,
    column_width: usize,
    form: UserData,
    form_visible: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, column_width: usize) -> Self {
        Self {
            out,
            column_width,
            form: UserData::default(),
            form_visible: false,
            error: None,
        }
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    /// Type a value into a form field.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.form.name = value,
            Field::Surname => self.form.surname = value,
            Field::Email => self.form.email = value,
        }
    }

    /// Write a free-form message line.
    pub fn message(&mut self, text: &str) {
        self.line(text.to_string());
    }

    /// The first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: String) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", text.trim_end()) {
            self.error = Some(e);
        }
    }

    fn cell(&self, text: &str) -> String {
        let width = self.column_width;
        let mut cell: String = text.chars().take(width).collect();
        let len = cell.chars().count();
        if len < width {
            cell.push_str(&" ".repeat(width - len));
        }
        cell
    }

    fn row(&self, cells: &[&str]) -> String {
        cells
            .iter()
            .map(|c| self.cell(c))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn print_form(&mut self) {
        let form = self.form.clone();
        self.line(format!("  name:    {}", form.name));
        self.line(format!("  surname: {}", form.surname));
        self.line(format!("  email:   {}", form.email));
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_table(&mut self, view: &[Record]) {
        let header = self.row(&HEADERS);
        let rule = "-".repeat(header.chars().count());
        self.line(header);
        self.line(rule);

        if view.is_empty() {
            self.line(NO_DATA.to_string());
            return;
        }

        for record in view {
            let id = record.id.to_string();
            let row = self.row(&[
                id.as_str(),
                record.name.as_str(),
                record.surname.as_str(),
                record.email.as_str(),
            ]);
            self.line(row);
        }
    }

    fn set_controls_enabled(&mut self, insert: bool, update: bool, remove: bool) {
        let enabled: Vec<&str> = [("insert", insert), ("update", update), ("remove", remove)]
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name)
            .collect();

        if enabled.is_empty() {
            self.line("Actions: none".to_string());
        } else {
            self.line(format!("Actions: {}", enabled.join(", ")));
        }
    }

    fn show_form(&mut self) {
        self.form_visible = true;
        self.line("Form open (name/surname/email <value>, then save or cancel):".to_string());
        self.print_form();
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn load_form_fields(&mut self, fields: &UserData) {
        self.form = fields.clone();
    }

    fn read_form_fields(&self) -> UserData {
        self.form.clone()
    }

    fn clear_form_fields(&mut self) {
        self.form = UserData::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn renders_rows() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 8);
        renderer.render_table(&[Record::new(2, "Aurelia", "Armas", "aarmas@mail.com")]);

        let text = output(renderer);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID       | Name"));
        assert_eq!(lines[2], "2        | Aurelia  | Armas    | aarmas@m");
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 8);
        renderer.render_table(&[]);
        assert!(output(renderer).lines().any(|l| l == NO_DATA));
    }

    #[test]
    fn controls_line() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 8);
        renderer.set_controls_enabled(true, false, false);
        renderer.set_controls_enabled(false, false, false);
        assert_eq!(output(renderer), "Actions: insert\nActions: none\n");
    }

    #[test]
    fn form_fields() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 8);
        renderer.load_form_fields(&UserData::new("A", "B", "c"));
        renderer.set_field(Field::Email, "new@mail.com".into());
        assert_eq!(renderer.read_form_fields(), UserData::new("A", "B", "new@mail.com"));

        renderer.show_form();
        assert!(renderer.form_visible());
        renderer.clear_form_fields();
        renderer.hide_form();
        assert!(!renderer.form_visible());
        assert!(renderer.read_form_fields().is_empty());
    }

    #[test]
    fn keeps_write_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut renderer = TerminalRenderer::new(Broken, 8);
        renderer.message("hello");
        let err = renderer.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(renderer.take_error().is_none());
    }
}
