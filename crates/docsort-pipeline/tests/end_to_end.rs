//! End-to-end batch runs against the built-in taxonomy

use chrono::NaiveDate;
use docsort_domain::builtin;
use docsort_pipeline::{Pipeline, PipelineConfig};
use std::fs;
use std::path::Path;
use std::sync::Arc;

const LISTING: &str = "\
File_Name\tDocument_ID\tOwner\tNotes
LOA-DHA-ASTECO-ABS-DHSB-04PD-2024\tDOC123\tAdmin\tsigned
Some random text with SHA and P220\tDOC200\tAdmin\tdraft

Tiara facade report\tDOC300\tEng\tfinal
LOA-DHA-ASTECO-ABS-DHSB-04PD-2024\tDOC123\tAdmin\trepeat
too\tshort
Quarterly budget\tDOC400\tFin\tmisc
";

fn pipeline(output_dir: &Path, detailed: bool) -> Pipeline {
    let mut config = if detailed {
        PipelineConfig::detailed()
    } else {
        PipelineConfig::default()
    };
    config.output_dir = output_dir.to_path_buf();
    Pipeline::new(Arc::new(builtin::taxonomy()), config)
        .unwrap()
        .with_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
}

fn write_listing(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("listing.txt");
    fs::write(&input, LISTING).unwrap();
    input
}

#[test]
fn test_full_run_writes_expected_tables() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_listing(dir.path());
    let out = dir.path().join("out");

    let report = pipeline(&out, false).process_file(&input).unwrap();

    assert!(report.success());
    assert_eq!(report.lines_read, 6);
    assert_eq!(report.records, 4);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.malformed, 1);
    assert_eq!(report.uncategorized, 1);

    for name in ["DHSB", "PD031", "PD002", "UNCATEGORIZED", "MERGED"] {
        assert!(out.join(format!("{}.csv", name)).exists(), "{} missing", name);
    }

    let merged = fs::read_to_string(out.join("MERGED.csv")).unwrap();
    let lines: Vec<_> = merged.lines().collect();
    assert_eq!(
        lines[0],
        "File_Name,Document_ID,Created_Date,Last_Modified,Project_Code,Project_Name"
    );
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("LOA-DHA-ASTECO-ABS-DHSB-04PD-2024,DOC123,2024-03-01,2024-03-01,DHSB,"));
    assert!(lines[2].contains(",PD031,"));
    assert!(lines[3].contains(",PD002,"));
    assert!(lines[4].contains(",UNCAT,Uncategorized"));
}

#[test]
fn test_three_records_two_codes() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let input = dir.path().join("listing.txt");
    fs::write(
        &input,
        "header\n\
         a.pdf\tD1\tSHA\tx\n\
         b.pdf\tD2\tTIARA\tx\n\
         c.pdf\tD3\tSEVEN HOTEL\tx\n",
    )
    .unwrap();

    let report = pipeline(&out, false).process_file(&input).unwrap();

    assert_eq!(report.tables_written.len(), 3);
    assert!(!out.join("UNCATEGORIZED.csv").exists());

    let pd031 = fs::read_to_string(out.join("PD031.csv")).unwrap();
    assert_eq!(pd031.lines().count(), 3);
    let merged = fs::read_to_string(out.join("MERGED.csv")).unwrap();
    let files: Vec<_> = merged
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(files, vec!["a.pdf", "c.pdf", "b.pdf"]);
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_listing(dir.path());
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    pipeline(&first, true).process_file(&input).unwrap();
    let p = pipeline(&second, true);
    p.process_file(&input).unwrap();
    // Same pipeline twice: each run gets its own seen-key set
    let again = p.process_file(&input).unwrap();
    assert_eq!(again.duplicates, 1);

    for name in ["DHSB", "PD031", "PD002", "UNCATEGORIZED", "MERGED"] {
        let a = fs::read(first.join(format!("{}.csv", name))).unwrap();
        let b = fs::read(second.join(format!("{}.csv", name))).unwrap();
        assert_eq!(a, b, "{} differs", name);
    }
}

#[test]
fn test_detailed_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_listing(dir.path());
    let out = dir.path().join("out");

    pipeline(&out, true).process_file(&input).unwrap();

    let dhsb = fs::read_to_string(out.join("DHSB.csv")).unwrap();
    let lines: Vec<_> = dhsb.lines().collect();
    assert!(lines[0].ends_with(",Document_Type,Reference_Number"));
    assert!(lines[1].ends_with(",Letter,04PD-2024"));
}

#[test]
fn test_export_failure_is_partial() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_listing(dir.path());
    let out = dir.path().join("out");
    fs::create_dir_all(&out).unwrap();
    // A directory where the file should go makes that one table fail
    fs::create_dir_all(out.join("PD031.csv")).unwrap();

    let report = pipeline(&out, false).process_file(&input).unwrap();

    assert!(!report.success());
    assert_eq!(report.tables_failed.len(), 1);
    assert_eq!(report.tables_failed[0].table, "PD031");
    assert!(out.join("MERGED.csv").is_file());
    assert!(out.join("DHSB.csv").is_file());
}
