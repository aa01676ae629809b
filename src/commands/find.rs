use std::io::Write;
use std::path::Path;

use crate::console::is_stdout_terminal;
use crate::exceptions::RollbookError;
use crate::recordstore::store::RecordStore;
use crate::render;

pub fn run(file: &Path, roll_number: String, json: bool) -> Result<(), RollbookError> {
    let mut store = RecordStore::new();
    store.load_from_file(file)?;

    let Some(record) = store.find_by_key(&roll_number) else {
        return Err(RollbookError::NotFound(roll_number));
    };

    if json {
        let mut stdout = std::io::stdout();
        let res = if is_stdout_terminal() {
            serde_json::to_writer_pretty(&mut stdout, record)
        } else {
            serde_json::to_writer(&mut stdout, record)
        };

        if let Err(e) = res
            && !e.is_io()
        {
            return Err(RollbookError::Serialization(e));
        }
        let _ = writeln!(stdout);
        return Ok(());
    }

    println!("{}", render::describe(record));
    Ok(())
}
