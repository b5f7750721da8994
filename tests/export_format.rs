//! Integration tests: trajectory export to aligned text

use laser_rs::output::export::{ExportError, Exporter, TextConfig, TextExporter, export_with_notice};

mod common;
use common::integrator_with_window;

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Number of decimals of a fixed-point field
fn decimals(field: &str) -> usize {
    field.split('.').nth(1).map(str::len).unwrap_or(0)
}

#[test]
fn test_four_columns_with_threshold() {
    let trajectory = integrator_with_window(1.0e-4, 50)
        .solve_rates(2.0e-3, 30.0e-6)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ndyag.dat");
    TextExporter::default().export(&trajectory, &path).unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 51);

    assert!(lines[0].starts_with('#'));
    let header: Vec<&str> = lines[0][1..].split_whitespace().collect();
    assert_eq!(header, ["t", "N/Ne", "No/Ne", "U/Uo"]);

    for (i, line) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields.len(), 4, "line {}", i + 1);
        assert!(fields.iter().all(|f| decimals(f) == 5), "line {}", i + 1);

        let t: f64 = fields[0].parse().unwrap();
        assert!((t - trajectory.time[i]).abs() < 5e-6);
    }

    let first: Vec<&str> = lines[1].split_whitespace().collect();
    assert_eq!(first[0], "0.00000");
    assert_eq!(first[1], "0.00000");
    assert_eq!(first[3], "0.00000");
}

#[test]
fn test_two_columns_without_threshold() {
    let trajectory = integrator_with_window(1.0e-4, 20)
        .solve_rates(2.0e-3, 0.0)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_cavity.dat");
    TextExporter::default().export(&trajectory, &path).unwrap();

    let lines = read_lines(&path);
    let header: Vec<&str> = lines[0][1..].split_whitespace().collect();
    assert_eq!(header, ["t", "N/Ne"]);
    assert!(
        lines[1..]
            .iter()
            .all(|line| line.split_whitespace().count() == 2)
    );
}

#[test]
fn test_columns_are_aligned() {
    let trajectory = integrator_with_window(1.0e-4, 30)
        .solve_rates(2.0e-3, 30.0e-6)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aligned.dat");
    TextExporter::default().export(&trajectory, &path).unwrap();

    let lines = read_lines(&path);
    let width = lines[0].len();
    assert!(lines.iter().all(|line| line.len() == width));
}

#[test]
fn test_metadata_block_precedes_header() {
    let trajectory = integrator_with_window(1.0e-4, 10)
        .solve_rates(2.0e-3, 30.0e-6)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("with_metadata.dat");
    TextExporter::new(TextConfig::default().with_metadata())
        .export(&trajectory, &path)
        .unwrap();

    let lines = read_lines(&path);
    let header = lines
        .iter()
        .position(|line| line.contains("N/Ne") && line.contains("U/Uo") && !line.contains(':'))
        .unwrap();

    assert!(lines[..header].iter().all(|line| line.starts_with('#')));
    assert!(lines.iter().any(|line| line.starts_with("# Generated: ")));
    assert!(lines.iter().any(|line| line == "# solver: Runge Kutta (RK4)"));
    assert!(lines.iter().any(|line| line.starts_with("# Steady state: Ne/Nv = ")));
    assert_eq!(lines.len(), header + 1 + 10);
}

#[test]
fn test_missing_directory_gives_notice() {
    let trajectory = integrator_with_window(1.0e-4, 10)
        .solve_rates(2.0e-3, 30.0e-6)
        .unwrap();
    let snapshot = trajectory.clone();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("ndyag.dat");

    let exporter = TextExporter::default();
    assert!(matches!(
        exporter.export(&trajectory, &path),
        Err(ExportError::Io(_))
    ));

    let notice = export_with_notice(&exporter, &trajectory, &path).unwrap();
    assert!(notice.starts_with("Could not save"));
    assert!(notice.contains("ndyag.dat"));

    assert_eq!(trajectory, snapshot);
    assert!(!path.exists());
}

#[test]
fn test_successful_export_gives_no_notice() {
    let trajectory = integrator_with_window(1.0e-4, 10)
        .solve_rates(1.0e-3, 10.0e-6)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ok.dat");

    assert!(export_with_notice(&TextExporter::default(), &trajectory, &path).is_none());
    assert!(path.exists());
}
