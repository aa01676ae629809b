use std::path::Path;

use crate::exceptions::RollbookError;
use crate::recordstore::store::RecordStore;

pub fn run(
    file: &Path,
    roll_number: String,
    name: String,
    department: String,
) -> Result<(), RollbookError> {
    let mut store = RecordStore::new();
    store.add(roll_number.clone(), name, department);

    // Save appends, so a single-record store writes exactly one new line
    store.save_to_file(file)?;

    println!("Added record {} to {}", roll_number, file.display());
    Ok(())
}
