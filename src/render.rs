use comfy_table::presets::NOTHING;
use comfy_table::*;

use crate::console::strip_ansi_codes;
use crate::models::Record;

/// Builds the record table shared by `list` and the shell's display option.
pub fn record_table<'a>(records: impl Iterator<Item = &'a Record>, width: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_width(width as u16)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Roll Number")
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Department").add_attribute(Attribute::Bold),
    ]);

    table
        .column_mut(0)
        .unwrap()
        .set_constraint(ColumnConstraint::ContentWidth);
    table
        .column_mut(1)
        .unwrap()
        .set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(16)));

    for record in records {
        table.add_row(vec![
            Cell::new(&record.roll_number).set_alignment(CellAlignment::Right),
            Cell::new(&record.name),
            Cell::new(&record.department),
        ]);
    }

    table
}

/// Renders the table under a centered title, width measured without ANSI
/// codes so styling does not skew the centering.
pub fn titled_table(title: &str, table: &Table) -> String {
    let table_output = table.to_string();
    let plain_output = strip_ansi_codes(&table_output);
    let table_full_width = plain_output.lines().next().unwrap_or("").len();

    let mut out = String::new();
    if table_full_width > title.len() {
        let padding = (table_full_width - title.len()) / 2;
        out.push_str(&" ".repeat(padding));
    }
    out.push_str(title);
    out.push('\n');
    out.push_str(&table_output);
    out.push('\n');
    out
}

/// One-line rendering of a record for find results.
pub fn describe(record: &Record) -> String {
    format!(
        "Roll Number: {}  Name: {}  Department: {}",
        record.roll_number, record.name, record.department
    )
}
