// File: crates/thread-timings/tests/pipeline.rs
// Purpose: End-to-end runs of the load -> sort -> render pipeline in a temp directory.

use std::path::Path;

use thread_timings::config::{DEFAULT_MULTI_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SINGLE_PATH};
use thread_timings::{run, ParseErrorKind, PlotConfig, PlotError};

const SINGLE: &str = "1 10.0\n2 5.5\n4 3.25\n";
const MULTI: &str = "1 10.0\n2 2.9\n4 1.6\n";

fn config_in(dir: &Path) -> PlotConfig {
    PlotConfig {
        single_path: dir.join(DEFAULT_SINGLE_PATH),
        multi_path: dir.join(DEFAULT_MULTI_PATH),
        output_path: dir.join(DEFAULT_OUTPUT_PATH),
        show: false,
    }
}

fn write_inputs(cfg: &PlotConfig, single: &str, multi: &str) {
    std::fs::write(&cfg.single_path, single).unwrap();
    std::fs::write(&cfg.multi_path, multi).unwrap();
}

#[test]
fn end_to_end_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    write_inputs(&cfg, SINGLE, MULTI);

    let out = run(&cfg).expect("run succeeds");
    assert_eq!(out.projection.threads, vec![1, 2, 4]);
    assert_eq!(out.projection.single_seconds, vec![10.0, 5.5, 3.25]);
    assert_eq!(out.projection.multi_seconds, vec![10.0, 2.9, 1.6]);

    let bytes = std::fs::read(&cfg.output_path).expect("png written");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1000, 600));
}

#[test]
fn unsorted_input_is_sorted_before_plotting() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    write_inputs(&cfg, "4 3.25\n1 10.0\n2 5.5\n", "2 2.9\n4 1.6\n1 10.0\n");

    let out = run(&cfg).expect("run succeeds");
    assert_eq!(out.projection.threads, vec![1, 2, 4]);
    assert_eq!(out.projection.single_seconds, vec![10.0, 5.5, 3.25]);
    assert_eq!(out.projection.multi_seconds, vec![10.0, 2.9, 1.6]);
    assert_eq!(out.chart.series[1].data_xy, vec![(1.0, 10.0), (2.0, 2.9), (4.0, 1.6)]);
}

#[test]
fn rerun_produces_identical_image() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    write_inputs(&cfg, SINGLE, MULTI);

    let first = run(&cfg).expect("first run");
    let a = image::open(&cfg.output_path).expect("decode first").to_rgba8();
    let second = run(&cfg).expect("second run");
    let b = image::open(&cfg.output_path).expect("decode second").to_rgba8();

    assert_eq!(a.dimensions(), b.dimensions());
    assert_eq!(first.projection, second.projection);
    for (s1, s2) in first.chart.series.iter().zip(&second.chart.series) {
        assert_eq!(s1.data_xy, s2.data_xy);
    }
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn malformed_line_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    write_inputs(&cfg, SINGLE, "1 10.0\n2\n4 1.6\n");

    let err = run(&cfg).unwrap_err();
    match &err {
        PlotError::Parse { origin, line, kind } => {
            assert_eq!(origin, &cfg.multi_path);
            assert_eq!(*line, 2);
            assert_eq!(kind, &ParseErrorKind::TokenCount { found: 1 });
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!cfg.output_path.exists(), "no output on parse failure");
}

#[test]
fn non_numeric_token_leaves_previous_output_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    write_inputs(&cfg, SINGLE, MULTI);
    run(&cfg).expect("initial run");
    let before = std::fs::read(&cfg.output_path).unwrap();

    write_inputs(&cfg, "1 10.0\n2 fast\n", MULTI);
    let err = run(&cfg).unwrap_err();
    assert!(err.is_parse(), "got {err}");
    assert_eq!(std::fs::read(&cfg.output_path).unwrap(), before);
}

#[test]
fn missing_input_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    std::fs::write(&cfg.single_path, SINGLE).unwrap();

    let err = run(&cfg).unwrap_err();
    assert!(err.is_not_found(), "got {err}");
    assert!(err.to_string().contains(DEFAULT_MULTI_PATH));
    assert!(!cfg.output_path.exists());
}

#[test]
fn length_mismatch_is_a_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    write_inputs(&cfg, SINGLE, "1 10.0\n2 2.9\n");

    let err = run(&cfg).unwrap_err();
    assert!(matches!(err, PlotError::Render(_)), "got {err}");
    assert!(!cfg.output_path.exists());
}

#[test]
fn empty_inputs_render_an_empty_chart() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    write_inputs(&cfg, "", "");

    let out = run(&cfg).expect("run succeeds");
    assert!(out.projection.threads.is_empty());
    assert!(cfg.output_path.exists());
}
