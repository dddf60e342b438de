//! CSV export of the standings table.

use crate::models::TeamStats;

const HEADER: [&str; 9] = ["name", "P", "W", "L", "PS", "PC", "DIFF", "Str", "PTS"];

/// Write the table as CSV: a header row with the wire column names, then one row per team.
/// The header is written even when the table is empty.
pub fn table_to_csv(table: &[TeamStats]) -> csv::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for row in table {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}
