//! Record loading functionality

use super::SummaryRecord;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a simulation record from a JSON file
///
/// Records without an `interval` field load with an interval of 1, so old
/// results keep plotting with a unit x-axis.
pub fn load_record(path: impl AsRef<Path>) -> Result<SummaryRecord> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let record: SummaryRecord = serde_json::from_str(&content).map_err(|e| {
        Error::Serialization(format!("Failed to parse record {}: {e}", path.display()))
    })?;

    Ok(record)
}
