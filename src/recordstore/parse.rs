use crate::models::Record;

/// Field separator in the record file.
pub const FIELD_DELIMITER: char = '|';

/// Strips leading and trailing ASCII spaces only. Tabs and other whitespace
/// belong to the field. All-space or empty input trims to the empty string.
pub fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Parses one line of the record file.
///
/// The first two `|` characters bound the roll number and the name;
/// everything after the second `|` is the department, so a department may
/// itself contain further `|` characters. A line with fewer than two `|`
/// yields `None`.
pub fn parse_line(line: &str) -> Option<Record> {
    let (roll_number, rest) = line.split_once(FIELD_DELIMITER)?;
    let (name, department) = rest.split_once(FIELD_DELIMITER)?;

    Some(Record {
        roll_number: trim_spaces(roll_number).to_string(),
        name: trim_spaces(name).to_string(),
        department: trim_spaces(department).to_string(),
    })
}

/// Formats a record as a file line, one space on each side of the delimiter.
/// Fields are written as stored; nothing is trimmed on the way out.
pub fn format_line(record: &Record) -> String {
    format!(
        "{} | {} | {}",
        record.roll_number, record.name, record.department
    )
}
