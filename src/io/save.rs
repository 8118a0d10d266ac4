//! Record saving functionality

use super::SummaryRecord;
use crate::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a simulation record to a JSON file
///
/// # Example
///
/// ```no_run
/// use simular::io::{save_record, SummaryRecord};
///
/// let record = SummaryRecord {
///     low: vec![-0.1],
///     median: vec![0.0],
///     high: vec![0.1],
///     interval: 1000,
/// };
/// save_record(&record, "output.json").unwrap();
/// ```
pub fn save_record(record: &SummaryRecord, path: impl AsRef<Path>) -> Result<()> {
    let data = serde_json::to_string_pretty(record)
        .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_record() -> SummaryRecord {
        SummaryRecord {
            low: vec![-0.5, -0.2],
            median: vec![0.0, 0.1],
            high: vec![0.5, 0.6],
            interval: 100,
        }
    }

    #[test]
    fn test_save_writes_fields() {
        let temp_file = NamedTempFile::new().unwrap();
        save_record(&sample_record(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"median\""));
        assert!(content.contains("\"interval\""));
        assert!(content.contains("100"));
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let temp_file = NamedTempFile::new().unwrap();
        save_record(&sample_record(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_save_invalid_path() {
        let result = save_record(&sample_record(), "/nonexistent/directory/out.json");
        assert!(result.is_err());
    }
}
