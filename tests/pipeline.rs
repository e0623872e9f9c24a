// End-to-end runs over real folders of generated PDFs

mod common;

use std::fs;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rstest::rstest;

use common::write_sample_pdf;
use pdf2sheet::error::RunError;
use pdf2sheet::run;
use pdf2sheet::types::RunOutcome;

fn read_range(path: &Path) -> calamine::Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.worksheet_range("Sheet1").unwrap()
}

#[test]
fn full_run_writes_one_row_per_valid_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pdfs");
    fs::create_dir(&input).unwrap();

    write_sample_pdf(&input.join("report.pdf"), &["ALPHA", "BRAVO"]);
    write_sample_pdf(&input.join("memo.pdf"), &["single page"]);
    fs::write(input.join("broken.pdf"), b"definitely not a pdf").unwrap();
    fs::write(input.join("notes.txt"), b"ignored").unwrap();

    let out = dir.path().join("out.xlsx");
    let outcome = run::execute(&input, &out).unwrap();

    match outcome {
        RunOutcome::Exported {
            rows,
            warnings,
            output,
        } => {
            assert_eq!(rows, 2);
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].contains("broken.pdf"));
            assert_eq!(output, out);
        }
        other => panic!("expected Exported, got {other:?}"),
    }

    let range = read_range(&out);
    assert_eq!(
        range.get_value((0, 0)),
        Some(&Data::String("File Name".into()))
    );

    // exactly two data rows, page counts match the sources
    let mut rows: Vec<(String, f64)> = Vec::new();
    for r in 1..=2u32 {
        let name = match range.get_value((r, 0)) {
            Some(Data::String(s)) => s.clone(),
            other => panic!("missing file name in row {r}: {other:?}"),
        };
        let pages = match range.get_value((r, 2)) {
            Some(Data::Float(n)) => *n,
            other => panic!("missing page count in row {r}: {other:?}"),
        };
        rows.push((name, pages));
    }
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(rows[0], ("memo.pdf".to_string(), 1.0));
    assert_eq!(rows[1], ("report.pdf".to_string(), 2.0));
    assert_eq!(range.get_value((3, 0)), None);
}

#[test]
fn extracted_cell_holds_pages_joined_by_blank_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pdfs");
    fs::create_dir(&input).unwrap();
    write_sample_pdf(&input.join("two.pdf"), &["FIRSTPAGE", "SECONDPAGE"]);

    let out = dir.path().join("out.xlsx");
    run::execute(&input, &out).unwrap();

    let range = read_range(&out);
    let text = match range.get_value((1, 1)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected text cell, got {other:?}"),
    };
    let first = text.find("FIRSTPAGE").expect("page 1 text missing");
    let second = text.find("SECONDPAGE").expect("page 2 text missing");
    assert!(first < second);
    assert!(text[first..second].contains("\n\n"));
    assert_eq!(text, text.trim());
}

#[rstest]
#[case(&["only.txt", "data.csv"])]
#[case(&[])]
fn folder_without_pdfs_reports_nothing_to_export(#[case] files: &[&str]) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pdfs");
    fs::create_dir(&input).unwrap();
    for name in files {
        fs::write(input.join(name), b"x").unwrap();
    }

    let out = dir.path().join("out.xlsx");
    match run::execute(&input, &out).unwrap() {
        RunOutcome::Nothing { warnings } => assert!(warnings.is_empty()),
        other => panic!("expected Nothing, got {other:?}"),
    }
    assert!(!out.exists(), "no spreadsheet may be written");
}

#[test]
fn all_corrupt_pdfs_yield_only_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pdfs");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("one.pdf"), b"junk").unwrap();
    fs::write(input.join("two.pdf"), b"more junk").unwrap();

    let out = dir.path().join("out.xlsx");
    match run::execute(&input, &out).unwrap() {
        RunOutcome::Nothing { warnings } => assert_eq!(warnings.len(), 2),
        other => panic!("expected Nothing, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn nonexistent_folder_aborts_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.xlsx");

    let err = run::execute(&dir.path().join("missing"), &out).unwrap_err();
    assert!(matches!(err, RunError::MissingFolder(_)));
    assert!(!out.exists());
}

#[test]
fn rerun_overwrites_the_previous_spreadsheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pdfs");
    fs::create_dir(&input).unwrap();
    write_sample_pdf(&input.join("first.pdf"), &["before"]);

    let out = dir.path().join("out.xlsx");
    run::execute(&input, &out).unwrap();

    fs::remove_file(input.join("first.pdf")).unwrap();
    write_sample_pdf(&input.join("second.pdf"), &["after"]);
    run::execute(&input, &out).unwrap();

    let range = read_range(&out);
    assert_eq!(
        range.get_value((1, 0)),
        Some(&Data::String("second.pdf".into()))
    );
    assert_eq!(range.get_value((2, 0)), None, "rows must not merge");
}
