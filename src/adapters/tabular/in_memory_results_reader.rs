//! In-memory results reader for tests and embedding.

use crate::domain::tradespace::ResultRecord;
use crate::ports::{IngestError, ResultsReader};

/// Serves a fixed set of records.
///
/// Records are validated on every read so a bad fixture fails the same way
/// a bad file would. Positions are reported as 1-based row numbers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultsReader {
    records: Vec<ResultRecord>,
}

impl InMemoryResultsReader {
    pub fn new(records: Vec<ResultRecord>) -> Self {
        Self { records }
    }
}

impl ResultsReader for InMemoryResultsReader {
    fn read_records(&self) -> Result<Vec<ResultRecord>, IngestError> {
        for (index, record) in self.records.iter().enumerate() {
            record
                .validate()
                .map_err(|e| IngestError::invalid_record(index + 1, e))?;
        }
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tradespace::record_fixture;

    #[test]
    fn returns_records_unchanged() {
        let records = vec![record_fixture(1, "pSGL", 10.0, 20.0, 1.0)];
        let reader = InMemoryResultsReader::new(records.clone());
        assert_eq!(reader.read_records().unwrap(), records);
    }

    #[test]
    fn invalid_fixture_fails_like_a_file() {
        let mut bad = record_fixture(2, "pSGL", 10.0, 20.0, 1.0);
        bad.players = 0;
        let reader = InMemoryResultsReader::new(vec![record_fixture(1, "pSGL", 1.0, 2.0, 0.0), bad]);
        assert!(matches!(reader.read_records(), Err(IngestError::InvalidRecord { row: 2, .. })));
    }
}
