use std::path::Path;

use crate::exceptions::RollbookError;
use crate::fs::atomic_write_text;
use crate::recordstore::parse::format_line;
use crate::recordstore::store::RecordStore;

pub fn run(file: &Path, roll_number: String) -> Result<(), RollbookError> {
    let mut store = RecordStore::new();
    store.load_from_file(file)?;

    if !store.delete_by_key(&roll_number) {
        return Err(RollbookError::NotFound(roll_number));
    }

    // Loading reversed the line order, so walk back to front to write the
    // survivors in the file's original order.
    let mut text = String::new();
    for record in store.iter().rev() {
        text.push_str(&format_line(record));
        text.push('\n');
    }

    atomic_write_text(file, &text)?;
    println!("Deleted record {} from {}", roll_number, file.display());
    Ok(())
}
