//! CSV export of raw climate records.

use eco_api::ClimateRecord;
use std::io::Write;

/// Column order of the exported CSV.
pub const CSV_HEADER: [&str; 8] = [
    "id",
    "location_id",
    "location_name",
    "date",
    "metric",
    "unit",
    "value",
    "quality",
];

/// Write one row per record. Missing fields are left empty.
pub fn write_records_csv<W: Write>(writer: W, records: &[ClimateRecord]) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record([
            record.id().unwrap_or_default(),
            record.location_id().unwrap_or_default(),
            record.location_name().unwrap_or_default(),
            record.date_text().unwrap_or_default(),
            record.metric().unwrap_or_default(),
            record.unit().unwrap_or_default(),
            record.value().map(|v| v.to_string()).unwrap_or_default(),
            record
                .quality()
                .map(|q| q.as_str().to_string())
                .unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(records.len())
}
