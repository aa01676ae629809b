use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::exceptions::RollbookError;
use crate::models::{LoadOutcome, Record};
use crate::recordstore::parse;

/// Ordered collection of records, newest at the front.
///
/// Display and save both walk front to back, so the most recently added
/// record always comes first. The store owns its records outright; deleting
/// removes the entry instead of leaving a hole.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: VecDeque<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record at the front. Duplicate roll numbers are allowed
    /// and all retained; empty fields are accepted as given.
    pub fn add(
        &mut self,
        roll_number: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) {
        self.records.push_front(Record {
            roll_number: roll_number.into(),
            name: name.into(),
            department: department.into(),
        });
    }

    /// Returns the first record, front to back, whose roll number matches
    /// exactly (case-sensitive, full match).
    pub fn find_by_key(&self, roll_number: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.roll_number == roll_number)
    }

    /// Removes the first record matching `roll_number`. Returns whether a
    /// match was found and removed.
    pub fn delete_by_key(&mut self, roll_number: &str) -> bool {
        match self
            .records
            .iter()
            .position(|r| r.roll_number == roll_number)
        {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Front-to-back iteration in store order.
    pub fn iter(&self) -> vec_deque::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reads `path` line by line and prepends every parseable record, exactly
    /// as [`add`](Self::add) would. Because each line is prepended, the
    /// file's last line ends up at the front of the store. Lines with fewer
    /// than two delimiters are skipped without comment.
    pub fn load_from_file(&mut self, path: &Path) -> Result<LoadOutcome, RollbookError> {
        let file = File::open(path).map_err(|source| RollbookError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        if file.metadata()?.len() == 0 {
            return Ok(LoadOutcome::EmptyFile);
        }

        let reader = BufReader::new(file);
        let mut added = 0;
        for line in reader.lines() {
            if let Some(record) = parse::parse_line(&line?) {
                self.records.push_front(record);
                added += 1;
            }
        }

        Ok(LoadOutcome::Loaded { added })
    }

    /// Appends every record, front to back, to `path` as one line each. The
    /// file is never truncated, so repeated saves accumulate. Returns the
    /// number of lines written.
    pub fn save_to_file(&self, path: &Path) -> Result<usize, RollbookError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| RollbookError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;

        let mut writer = BufWriter::new(file);
        for record in &self.records {
            writeln!(writer, "{}", parse::format_line(record))?;
        }
        writer.flush()?;

        Ok(self.records.len())
    }
}
