use serde::{Deserialize, Serialize};

/// One student entry. `roll_number` is the lookup key, but the store does not
/// enforce uniqueness: duplicates are all retained and lookup/delete act on
/// the first match in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub roll_number: String,
    pub name: String,
    pub department: String,
}

/// Result of a bulk load, reported to the caller instead of printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file opened but contained zero bytes; nothing was added.
    EmptyFile,
    /// `added` records were parsed and inserted. Skipped malformed lines are
    /// not counted anywhere.
    Loaded { added: usize },
}
