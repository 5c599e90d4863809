//! Interactive text menu

use crate::application::EntryStore;
use crate::cli::output::{
    format_entry, format_entry_list, format_load_status, format_name_list, format_search_results,
};
use crate::error::Result;
use crate::infrastructure::{Backend, FileBackend};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "\n=== Menu ===
1. Add password
2. Get specific password
3. Show all passwords
4. Show names only
5. Search passwords
6. Delete entry
7. Export to text file
8. Import from JSON file
9. Exit";

/// Menu loop over an entry store.
///
/// Reads choices from `input` until `9` or end of input. Store failures are
/// reported on `output` and the loop continues.
pub struct Menu<'a, B: Backend, R: BufRead, W: Write> {
    store: &'a mut EntryStore<B>,
    input: R,
    output: W,
    export_default: PathBuf,
}

impl<'a, B: Backend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(store: &'a mut EntryStore<B>, input: R, output: W, export_default: PathBuf) -> Self {
        Menu {
            store,
            input,
            output,
            export_default,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let status = format_load_status(self.store.load_status(), self.store.backend().location());
        write!(self.output, "{}", status)?;
        writeln!(self.output, "=== Simple Password Manager ===")?;
        writeln!(self.output, "Note: Data is stored in plain text for easy access")?;

        loop {
            writeln!(self.output, "{}", MENU)?;

            let choice = match self.prompt("\nEnter your choice (1-9): ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.get()?,
                "3" => write!(self.output, "\n{}", format_entry_list(&self.store.all()))?,
                "4" => write!(self.output, "\n{}", format_name_list(&self.store.all()))?,
                "5" => self.search()?,
                "6" => self.delete()?,
                "7" => self.export()?,
                "8" => self.import()?,
                "9" => break,
                _ => writeln!(self.output, "Invalid choice! Please enter 1-9.")?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_field(&mut self, text: &str) -> Result<String> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }

    fn add(&mut self) -> Result<()> {
        let name = self.prompt_field("Enter name/service: ")?;
        let username = self.prompt_field("Enter username: ")?;
        let password = self.prompt_field("Enter password: ")?;

        if name.is_empty() || username.is_empty() || password.is_empty() {
            writeln!(self.output, "All fields are required!")?;
            return Ok(());
        }

        match self.store.add(&name, &username, &password) {
            Ok(entry) => writeln!(
                self.output,
                "Password for '{}' added successfully!",
                entry.display_name()
            )?,
            Err(e) => writeln!(self.output, "Error saving data: {}", e)?,
        }
        Ok(())
    }

    fn get(&mut self) -> Result<()> {
        let name = self.prompt_field("Enter name to search: ")?;
        if name.is_empty() {
            writeln!(self.output, "Name is required!")?;
            return Ok(());
        }

        match self.store.get(&name) {
            Some(entry) => write!(self.output, "\n{}", format_entry(entry))?,
            None => writeln!(self.output, "No entry found for '{}'", name)?,
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let term = self.prompt_field("Enter search term: ")?;
        if term.is_empty() {
            writeln!(self.output, "Search term is required!")?;
            return Ok(());
        }

        let results = self.store.search(&term);
        write!(self.output, "{}", format_search_results(&term, &results))?;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let name = self.prompt_field("Enter name to delete: ")?;
        if name.is_empty() {
            writeln!(self.output, "Name is required!")?;
            return Ok(());
        }

        let display_name = self
            .store
            .get(&name)
            .map(|entry| entry.display_name().to_string());

        match (self.store.delete(&name), display_name) {
            (Ok(true), Some(display_name)) => writeln!(
                self.output,
                "Entry for '{}' deleted successfully!",
                display_name
            )?,
            (Ok(_), _) => writeln!(self.output, "No entry found for '{}'", name)?,
            (Err(e), _) => writeln!(self.output, "Error saving data: {}", e)?,
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        let prompt = format!(
            "Enter filename (default: {}): ",
            self.export_default.display()
        );
        let filename = self.prompt_field(&prompt)?;
        let path = if filename.is_empty() {
            self.export_default.clone()
        } else {
            PathBuf::from(filename)
        };

        match self.store.export(&FileBackend::new(&path)) {
            Ok(()) => writeln!(self.output, "Data exported to {}", path.display())?,
            Err(e) => writeln!(self.output, "Export failed: {}", e)?,
        }
        Ok(())
    }

    fn import(&mut self) -> Result<()> {
        let filename = self.prompt_field("Enter JSON filename to import: ")?;
        let source = FileBackend::new(&filename);
        if filename.is_empty() || !source.exists() {
            writeln!(self.output, "File not found or filename is required!")?;
            return Ok(());
        }

        match self.store.import_merge(&source) {
            Ok(count) => writeln!(
                self.output,
                "Successfully imported {} entries from {}",
                count, filename
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }
}
