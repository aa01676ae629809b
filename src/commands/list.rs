use std::io::Write;
use std::path::Path;

use crate::console::{get_terminal_width, is_stdout_terminal};
use crate::exceptions::RollbookError;
use crate::models::{LoadOutcome, Record};
use crate::recordstore::store::RecordStore;
use crate::render;

pub fn run(file: &Path, json: bool) -> Result<(), RollbookError> {
    let mut store = RecordStore::new();
    let outcome = store.load_from_file(file)?;

    if json {
        let records: Vec<&Record> = store.iter().collect();

        let mut stdout = std::io::stdout();
        let res = if is_stdout_terminal() {
            serde_json::to_writer_pretty(&mut stdout, &records)
        } else {
            serde_json::to_writer(&mut stdout, &records)
        };

        if let Err(e) = res
            && !e.is_io()
        {
            return Err(RollbookError::Serialization(e));
        }
        let _ = writeln!(stdout);
        return Ok(());
    }

    if matches!(outcome, LoadOutcome::EmptyFile) || store.is_empty() {
        println!("No records in {}.", file.display());
        return Ok(());
    }

    let table = render::record_table(store.iter(), get_terminal_width());
    print!("{}", render::titled_table("Student Records", &table));
    Ok(())
}
