//! CSV adapter for the results reader port.
//!
//! The header row is skipped. Every data row must parse completely; the
//! first bad row aborts the whole read with its 1-based line number.

use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::layout::ColumnLayout;
use crate::domain::foundation::DesignIdSequence;
use crate::domain::tradespace::{DesignTags, ResultRecord, RunLabel};
use crate::ports::{IngestError, ResultsReader};

/// Reads result records from a comma-separated file.
pub struct CsvResultsReader {
    path: PathBuf,
    layout: ColumnLayout,
}

impl CsvResultsReader {
    pub fn new(path: impl Into<PathBuf>, layout: ColumnLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses records from any reader; `source_name` is used in errors.
    pub fn parse<R: Read>(&self, input: R, source_name: &str) -> Result<Vec<ResultRecord>, IngestError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(input);

        let mut ids = DesignIdSequence::new();
        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            // Line 1 is the header.
            let line = index + 2;
            let row = row.map_err(|e| IngestError::io(source_name, e))?;
            let record = RowParser {
                row: &row,
                line,
                layout: &self.layout,
            }
            .parse(&mut ids)?;
            records.push(record);
        }

        tracing::debug!("Read {} records from {}", records.len(), source_name);
        Ok(records)
    }
}

impl ResultsReader for CsvResultsReader {
    fn read_records(&self) -> Result<Vec<ResultRecord>, IngestError> {
        let name = self.path.display().to_string();
        let file = File::open(&self.path).map_err(|e| IngestError::io(&name, e))?;
        self.parse(file, &name)
    }
}

struct RowParser<'a> {
    row: &'a StringRecord,
    line: usize,
    layout: &'a ColumnLayout,
}

impl RowParser<'_> {
    fn parse(&self, ids: &mut DesignIdSequence) -> Result<ResultRecord, IngestError> {
        let l = self.layout;

        let run = RunLabel::new(self.text(l.run, "Run")?)
            .map_err(|e| IngestError::invalid_record(self.line, e))?;
        let isl = l.isl.map(|i| self.flag(i, "ISL")).transpose()?;
        let tags = DesignTags::from_label(&run, isl);

        let players = self.optional(l.players, "Players")?.unwrap_or(1);
        let exp_value = self.number(l.exp_value, "Avg")?;
        let cost = self.number(l.cost, "Cost")?;
        let std_err = self.number(l.std_err, "StdErr")?;

        let (total_cost, total_exp_value, total_std_err) = if l.has_totals() {
            (
                self.optional(l.total_cost, "Total Cost")?.unwrap_or(cost),
                self.optional(l.total_exp_value, "Total Value Avg")?.unwrap_or(exp_value),
                self.optional(l.total_std_err, "Total Value StdErr")?.unwrap_or(std_err),
            )
        } else {
            let n = f64::from(players);
            (cost * n, exp_value * n, std_err * n)
        };

        let record = ResultRecord {
            id: ids.next_id(),
            run,
            players,
            player: self.optional(l.player, "Player")?.unwrap_or(0),
            satellites: self.optional(l.satellites, "Satellites")?.unwrap_or(0),
            stations: self.optional(l.stations, "Stations")?.unwrap_or(0),
            tags,
            cost,
            min_value: self.optional(l.min_value, "Min")?.unwrap_or(exp_value),
            max_value: self.optional(l.max_value, "Max")?.unwrap_or(exp_value),
            exp_value,
            std_err,
            total_cost,
            total_exp_value,
            total_std_err,
        };
        record
            .validate()
            .map_err(|e| IngestError::invalid_record(self.line, e))?;
        Ok(record)
    }

    fn text(&self, index: usize, column: &str) -> Result<&str, IngestError> {
        self.row
            .get(index)
            .ok_or_else(|| IngestError::missing_column(self.line, column))
    }

    fn number<T>(&self, index: usize, column: &str) -> Result<T, IngestError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.text(index, column)?;
        raw.parse()
            .map_err(|e| IngestError::invalid_field(self.line, column, raw, e))
    }

    fn optional<T>(&self, index: Option<usize>, column: &str) -> Result<Option<T>, IngestError>
    where
        T: FromStr,
        T::Err: Display,
    {
        index.map(|i| self.number(i, column)).transpose()
    }

    fn flag(&self, index: usize, column: &str) -> Result<bool, IngestError> {
        let raw = self.text(index, column)?;
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(IngestError::invalid_field(self.line, column, raw, "expected true or false")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::tabular::LayoutPreset;

    const HEADER: &str = "Run,Players,Player,Satellites,Stations,ISL,Cost,Count,Min,Max,Avg,StdDev,StdErr,Total Cost,Total Value Avg,Total Value StdErr\n";

    fn experiment(body: &str) -> Result<Vec<ResultRecord>, IngestError> {
        let reader = CsvResultsReader::new("mem.csv", LayoutPreset::Experiment.layout());
        reader.parse(format!("{}{}", HEADER, body).as_bytes(), "mem.csv")
    }

    #[test]
    fn parses_experiment_rows_in_order() {
        let records = experiment(
            "1.SmallSat@MEO1|VIS|pSGL 1.GroundSta@SUR1|pSGL,1,0,1,1,false,1000,100,200,3000,2100,300,30,1000,2100,30\n\
             1.SmallSat@MEO1|VIS|pSGL|pISL 1.GroundSta@SUR1|pSGL,2,1,2,1,true,1200,100,500,4000,2600,400,40,2500,5000,55\n",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.value(), 1);
        assert_eq!(records[1].id.value(), 2);
        assert_eq!(records[0].run.as_str(), "1.SmallSat@MEO1,VIS,pSGL 1.GroundSta@SUR1,pSGL");
        assert!(!records[0].tags.isl);
        assert!(records[1].tags.isl && records[1].tags.pisl);
        assert_eq!(records[1].players, 2);
        assert_eq!(records[1].player, 1);
        assert_eq!(records[1].exp_value, 2600.0);
        assert_eq!(records[1].std_err, 40.0);
        assert_eq!(records[1].total_exp_value, 5000.0);
    }

    #[test]
    fn summary_rows_default_missing_columns() {
        let reader = CsvResultsReader::new("data.csv", LayoutPreset::Summary.layout());
        let input = "Run,Stations,ISL,Cost,Count,Min,Max,Avg,StdDev,StdErr\n7,1,false,900,50,100,500,300,80,11\n";

        let records = reader.parse(input.as_bytes(), "data.csv").unwrap();

        let r = &records[0];
        assert_eq!(r.run.as_str(), "7");
        assert_eq!((r.players, r.player, r.stations), (1, 0, 1));
        assert_eq!(r.total_cost, 900.0);
        assert_eq!(r.min_value, 100.0);
        assert_eq!(r.std_err, 11.0);
    }

    #[test]
    fn non_numeric_field_names_line_and_column() {
        let err = experiment(
            "a,1,0,1,1,false,1000,100,200,3000,2100,300,30,1000,2100,30\n\
             b,1,0,1,1,false,abc,100,200,3000,2100,300,30,1000,2100,30\n",
        )
        .unwrap_err();

        match err {
            IngestError::InvalidField { row, column, value, .. } => {
                assert_eq!(row, 3);
                assert_eq!(column, "Cost");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_row_reports_missing_column() {
        let err = experiment("a,1,0,1,1,false,1000,100,200,3000,2100,300\n").unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { row: 2, ref column } if column == "StdErr"));
    }

    #[test]
    fn negative_cost_is_an_invalid_record() {
        let err = experiment("a,1,0,1,1,false,-5,100,200,3000,2100,300,30,1000,2100,30\n").unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { row: 2, .. }));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let err = experiment("a,1,0,1,1,false,10,100,200,3000,NaN,300,30,1000,2100,30\n").unwrap_err();
        assert!(matches!(err, IngestError::InvalidRecord { row: 2, .. }));
    }

    #[test]
    fn bad_isl_flag_is_rejected() {
        let err = experiment("a,1,0,1,1,maybe,10,100,200,3000,2100,300,30,1000,2100,30\n").unwrap_err();
        assert!(matches!(err, IngestError::InvalidField { ref column, .. } if column == "ISL"));
    }

    #[test]
    fn isl_flag_accepts_numeric_and_any_case() {
        let records = experiment(
            "a,1,0,1,1,True,10,100,200,3000,2100,300,30,1000,2100,30\n\
             b,1,0,1,1,0,10,100,200,3000,2100,300,30,1000,2100,30\n\
             c,1,0,1,1,1,10,100,200,3000,2100,300,30,1000,2100,30\n",
        )
        .unwrap();
        let isl: Vec<bool> = records.iter().map(|r| r.tags.isl).collect();
        assert_eq!(isl, vec![true, false, true]);
    }

    #[test]
    fn header_only_file_is_empty() {
        assert!(experiment("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let reader = CsvResultsReader::new("/nonexistent/results.csv", ColumnLayout::experiment());
        assert!(matches!(reader.read_records(), Err(IngestError::Io { .. })));
    }
}
