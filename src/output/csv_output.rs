//! CSV persistence for the final record sequence

use crate::crawler::JournalRecord;
use crate::HarvestError;
use std::path::Path;

const HEADER: [&str; 4] = ["name", "affiliation", "accreditation", "link"];

/// Writes the dataset as UTF-8 CSV: a header row, then one row per record
///
/// The header is written unconditionally, so an empty dataset still yields
/// a well-formed single-line file.
pub fn write_csv(path: &Path, records: &[JournalRecord]) -> Result<(), HarvestError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.name.as_str(),
            record.affiliation.as_str(),
            record.accreditation.as_str(),
            record.link.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
