use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::console::{get_terminal_width, render_panel};
use crate::consts::{SHELL_BANNER, SHELL_MENU};
use crate::exceptions::RollbookError;
use crate::models::LoadOutcome;
use crate::recordstore::store::RecordStore;
use crate::render;

pub fn run(file: PathBuf) -> Result<(), RollbookError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), file).run()
}

/// The numbered-menu session, driven over generic handles so tests can pipe
/// a script of choices through it. All rendering happens here; the store
/// itself only returns structured results.
pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
    file: PathBuf,
    store: RecordStore,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, file: PathBuf) -> Self {
        Self {
            input,
            output,
            file,
            store: RecordStore::new(),
        }
    }

    pub fn run(mut self) -> Result<(), RollbookError> {
        let width = get_terminal_width();
        write!(
            self.output,
            "{}",
            render_panel("", &[SHELL_BANNER.to_string()], width)
        )?;

        self.load()?;

        loop {
            writeln!(self.output, "\n{}", SHELL_MENU)?;
            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                // EOF behaves like exit so piped scripts terminate cleanly
                writeln!(self.output)?;
                break;
            };

            match choice.trim() {
                "1" => self.add_record()?,
                "2" => self.display_all()?,
                "3" => self.find_record()?,
                "4" => self.delete_record()?,
                "5" => self.save()?,
                "6" => {
                    writeln!(self.output, "Exiting.")?;
                    break;
                }
                _ => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number from 1 to 6."
                )?,
            }
        }

        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, RollbookError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>, RollbookError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn load(&mut self) -> Result<(), RollbookError> {
        writeln!(self.output, "Loading records from {}", self.file.display())?;
        match self.store.load_from_file(&self.file) {
            Ok(LoadOutcome::Loaded { added }) => {
                writeln!(self.output, "Loaded {} record(s).", added)?;
            }
            Ok(LoadOutcome::EmptyFile) => {
                writeln!(self.output, "Record file is empty. Nothing to load.")?;
            }
            Err(RollbookError::FileOpen { .. }) => {
                writeln!(self.output, "No record file yet. Starting with an empty store.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn add_record(&mut self) -> Result<(), RollbookError> {
        let Some(roll_number) = self.prompt("Roll number: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(department) = self.prompt("Department: ")? else {
            return Ok(());
        };

        self.store.add(roll_number, name, department);
        writeln!(self.output, "Record added.")?;
        Ok(())
    }

    fn display_all(&mut self) -> Result<(), RollbookError> {
        if self.store.is_empty() {
            writeln!(self.output, "No records in the store.")?;
            return Ok(());
        }

        let table = render::record_table(self.store.iter(), get_terminal_width());
        write!(
            self.output,
            "{}",
            render::titled_table("Student Records", &table)
        )?;
        Ok(())
    }

    fn find_record(&mut self) -> Result<(), RollbookError> {
        let Some(roll_number) = self.prompt("Roll number to find: ")? else {
            return Ok(());
        };

        match self.store.find_by_key(&roll_number) {
            Some(record) => writeln!(self.output, "{}", render::describe(record))?,
            None => writeln!(self.output, "No record with roll number {}.", roll_number)?,
        }
        Ok(())
    }

    fn delete_record(&mut self) -> Result<(), RollbookError> {
        let Some(roll_number) = self.prompt("Roll number to delete: ")? else {
            return Ok(());
        };

        if self.store.delete_by_key(&roll_number) {
            writeln!(self.output, "Record {} deleted.", roll_number)?;
        } else {
            writeln!(
                self.output,
                "No record with roll number {}. Nothing deleted.",
                roll_number
            )?;
        }
        Ok(())
    }

    fn save(&mut self) -> Result<(), RollbookError> {
        match self.store.save_to_file(&self.file) {
            Ok(written) => writeln!(
                self.output,
                "Appended {} record(s) to {}.",
                written,
                self.file.display()
            )?,
            Err(e @ RollbookError::FileOpen { .. }) => writeln!(self.output, "{}", e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }
}
