//! Integration tests for a full experiment run.
//!
//! These tests verify the end-to-end flow:
//! 1. A results file on disk is parsed with a column layout preset
//! 2. A built-in plan selects views and comparisons
//! 3. Every chart is handed to the renderer under its output file name
//!
//! Uses the recording renderer so no fonts or image backends are needed.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fss_tradespace::adapters::chart::RecordingRenderer;
use fss_tradespace::adapters::tabular::{CsvResultsReader, LayoutPreset};
use fss_tradespace::application::{ExperimentReport, RunExperimentCommand, RunExperimentHandler};
use fss_tradespace::domain::experiment::ExperimentPlan;
use fss_tradespace::domain::foundation::{DomainError, ErrorCode};

// =============================================================================
// Test Infrastructure
// =============================================================================

const EXPERIMENT_HEADER: &str = "Run,Players,Player,Satellites,Stations,ISL,Cost,Count,Min,Max,Avg,StdDev,StdErr,Total Cost,Total Value Avg,Total Value StdErr";

/// Two-player runs: two independent designs, their shared-link twins and
/// one second-player row that every exp7 view ignores.
const EXP7_ROWS: &[&str] = &[
    "1.SmallSat@MEO1|VIS|pSGL 1.GroundSta@SUR1|pSGL 2.SmallSat@MEO4|VIS|pSGL 2.GroundSta@SUR4|pSGL,2,0,2,2,false,1000,100,500,3000,2000,200,10,2000,4000,20",
    "1.SmallSat@MEO1|VIS|pSGL 1.GroundSta@SUR1|pSGL 2.SmallSat@MEO4|VIS|pSGL 2.GroundSta@SUR4|pSGL,2,1,2,2,false,1000,100,500,3000,2000,200,10,2000,4000,20",
    "1.MediumSat@MEO1|VIS|SAR|pSGL 1.GroundSta@SUR1|pSGL 2.SmallSat@MEO4|VIS|pSGL 2.GroundSta@SUR4|pSGL,2,0,2,2,false,2000,100,900,4000,3000,300,15,4000,6000,30",
    "1.SmallSat@MEO1|VIS|oSGL 1.GroundSta@SUR1|oSGL 2.SmallSat@MEO4|VIS|oSGL 2.GroundSta@SUR4|oSGL,2,0,2,2,false,1000,100,700,3500,2500,250,12,2000,5000,24",
    "1.MediumSat@MEO1|VIS|SAR|oSGL 1.GroundSta@SUR1|oSGL 2.SmallSat@MEO4|VIS|oSGL 2.GroundSta@SUR4|oSGL,2,0,2,2,false,2000,100,1200,5000,4000,350,16,4000,8000,32",
];

fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut body = String::from(header);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(&path, body).unwrap();
    path
}

fn run(
    path: PathBuf,
    layout: LayoutPreset,
    plan: &str,
) -> (Arc<RecordingRenderer>, Result<ExperimentReport, DomainError>) {
    let renderer = Arc::new(RecordingRenderer::new());
    let reader = CsvResultsReader::new(path, layout.layout());
    let handler = RunExperimentHandler::new(Arc::new(reader), renderer.clone());
    let result = handler.handle(RunExperimentCommand {
        plan: ExperimentPlan::preset(plan).unwrap(),
        output_dir: PathBuf::from("out"),
    });
    (renderer, result)
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn exp7_renders_both_views_and_the_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "results.csv", EXPERIMENT_HEADER, EXP7_ROWS);

    let (renderer, result) = run(path, LayoutPreset::Experiment, "exp7");
    let report = result.unwrap();

    assert_eq!(report.plan, "exp7");
    assert_eq!(report.records_read, 5);
    assert_eq!(
        report.written,
        vec![
            PathBuf::from("out/2i-exp-ts.png"),
            PathBuf::from("out/2c-exp-ts.png"),
            PathBuf::from("out/2-exp.png"),
        ]
    );
    assert_eq!(renderer.paths(), report.written);

    let views: Vec<(&str, usize)> = report.views.iter().map(|v| (v.label.as_str(), v.points)).collect();
    assert_eq!(views, vec![("2i", 2), ("2c", 2)]);

    // Totals are split between the two players.
    let independent = &renderer.tradespaces()[0];
    let plotted: Vec<(f64, f64)> = independent
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| (p.cost, p.value)))
        .collect();
    assert_eq!(plotted, vec![(1000.0, 2000.0), (2000.0, 3000.0)]);

    let comparison = &report.comparisons[0];
    assert_eq!(comparison.label, "2-exp");
    assert_eq!(comparison.counterparts, 2);
    assert_eq!(renderer.frontiers()[0].fronts.len(), 3);
}

#[test]
fn malformed_row_aborts_before_any_chart() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = EXP7_ROWS.to_vec();
    rows.insert(
        2,
        "1.SmallSat@MEO1|VIS|pSGL 1.GroundSta@SUR1|pSGL,2,0,2,2,false,n/a,100,500,3000,2000,200,10,2000,4000,20",
    );
    let path = write_csv(dir.path(), "results.csv", EXPERIMENT_HEADER, &rows);

    let (renderer, result) = run(path, LayoutPreset::Experiment, "exp7");
    let err = result.unwrap_err();

    assert_eq!(err.code, ErrorCode::IngestFailed);
    assert_eq!(err.details.get("row"), Some(&"4".to_string()));
    assert_eq!(err.details.get("column"), Some(&"Cost".to_string()));
    assert_eq!(renderer.render_count(), 0);
}

#[test]
fn negative_std_err_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let rows = [
        "1.SmallSat@MEO1|VIS|pSGL 1.GroundSta@SUR1|pSGL,1,0,1,1,false,1000,100,500,3000,2000,200,-1,1000,2000,10",
    ];
    let path = write_csv(dir.path(), "results.csv", EXPERIMENT_HEADER, &rows);

    let (renderer, result) = run(path, LayoutPreset::Experiment, "exp3");

    assert_eq!(result.unwrap_err().code, ErrorCode::IngestFailed);
    assert_eq!(renderer.render_count(), 0);
}

#[test]
fn missing_input_file_is_an_ingest_error() {
    let dir = tempfile::tempdir().unwrap();

    let (renderer, result) = run(dir.path().join("absent.csv"), LayoutPreset::Experiment, "exp3");

    assert_eq!(result.unwrap_err().code, ErrorCode::IngestFailed);
    assert_eq!(renderer.render_count(), 0);
}

#[test]
fn summary_plan_reads_the_short_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "data.csv",
        "Run,Stations,ISL,Cost,Count,Min,Max,Avg,StdDev,StdErr",
        &[
            "1,1,false,900,50,100,500,300,80,11",
            "2,1,true,1500,50,200,900,700,90,12",
            "3,2,false,1200,50,100,800,500,85,10",
        ],
    );

    let (renderer, result) = run(path, LayoutPreset::Summary, "summary");
    let report = result.unwrap();

    assert_eq!(report.written, vec![PathBuf::from("out/tradespace-exp-ts.png")]);
    // The two-station run is filtered out.
    assert_eq!(report.views[0].points, 2);
    assert_eq!(renderer.tradespaces()[0].labels.len(), 2);
}

#[test]
fn views_without_matching_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "results.csv", EXPERIMENT_HEADER, EXP7_ROWS);

    // exp3 only looks at one-player runs and the first player of two-player runs.
    let (renderer, result) = run(path, LayoutPreset::Experiment, "exp3");
    let report = result.unwrap();

    let skipped: Vec<&str> = report.skipped_views().collect();
    assert_eq!(skipped, vec!["1-1", "1-2", "1-3", "1-4"]);
    assert_eq!(report.written, vec![PathBuf::from("out/2-2-exp-ts.png")]);
    assert_eq!(renderer.render_count(), 1);
}
