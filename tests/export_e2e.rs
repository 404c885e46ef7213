// tests/export_e2e.rs
//
// TableExporter writing real files into a scratch directory.
//
mod common;

use std::{fs, path::Path};

use serde_json::{Value, json};
use xtream_export::{
    Category, ContentType, ExportOutcome, Record, RunStamp, TableExporter,
    error::ExportError,
    report::MemoryReport,
};

use common::{file_names, read_lines};

fn stamp() -> RunStamp {
    "20240101T000000Z".parse().unwrap()
}

fn records(v: Value) -> Vec<Record> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_object().cloned().unwrap())
        .collect()
}

fn export_into(
    dir: &Path,
    report: &MemoryReport,
    recs: Value,
    cats: &[Category],
    ct: &str,
) -> ExportOutcome {
    let exporter = TableExporter::new(dir, report);
    exporter.export(records(recs), cats, &ContentType::from(ct), &format!("acme_{ct}_streams"), &stamp())
}

#[test]
fn live_example_row() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([{ "category_id": "5", "name": "Channel A", "added": "1700000000" }]),
        &[Category::new("5", "News")],
        "live",
    );

    let path = out.path().unwrap().to_path_buf();
    assert_eq!(path.file_name().unwrap(), "acme_live_streams_20240101T000000Z.csv");
    assert!(matches!(out, ExportOutcome::Written { rows: 1, .. }));

    let lines = read_lines(&path);
    assert_eq!(
        lines,
        vec![
            "category_name,name,num,stream_icon,epg_channel_id,is_adult,added,category_id",
            "News,Channel A,,,,,2023-11-14T22:13:20+00:00,5",
        ]
    );
    assert!(report.warnings().is_empty());
    assert!(report.entries().iter().any(|(_, m)| m.starts_with("Live stream data saved to")));
}

#[test]
fn vod_keeps_stream_id_in_canonical_slot() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([
            { "category_id": "2", "name": "Film", "stream_id": 101, "rating": "7.1",
              "added": "0", "stream_icon": "http://i/1.png", "container_extension": "mkv" }
        ]),
        &[Category::new("2", "Movies")],
        "vod",
    );

    let lines = read_lines(out.path().unwrap());
    assert_eq!(
        lines[0],
        "category_name,name,stream_id,rating,added,stream_icon,category_id,container_extension"
    );
    assert_eq!(
        lines[1],
        "Movies,Film,101,7.1,1970-01-01T00:00:00+00:00,http://i/1.png,2,mkv"
    );
}

#[test]
fn live_and_series_drop_stream_id_values() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();

    for ct in ["live", "series"] {
        let out = export_into(
            tmp.path(),
            &report,
            json!([{ "category_id": "1", "name": "X", "stream_id": 55 }]),
            &[Category::new("1", "Cat")],
            ct,
        );
        let lines = read_lines(out.path().unwrap());
        let header: Vec<&str> = lines[0].split(',').collect();
        let row: Vec<&str> = lines[1].split(',').collect();

        // The observed column stays in the header but carries no value
        let ix = header.iter().position(|h| *h == "stream_id").unwrap();
        assert_eq!(row[ix], "", "{ct}");
        assert!(!lines[1].contains("55"), "{ct}");
    }
}

#[test]
fn series_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([{
            "category_id": "9", "name": "Show", "series_id": 3, "rating": "8",
            "cast": "A, B", "director": "D", "genre": "Drama", "plot": "It's \"good\"",
            "cover": "c.jpg", "last_modified": "1700000000"
        }]),
        &[Category::new("9", "TV")],
        "series",
    );

    let lines = read_lines(out.path().unwrap());
    assert_eq!(
        lines[0],
        "category_name,name,series_id,rating,cast,director,genre,plot,cover,category_id,last_modified"
    );
    // only `added` is converted; last_modified stays raw
    assert_eq!(
        lines[1],
        r#"TV,Show,3,8,"A, B",D,Drama,"It's ""good""",c.jpg,9,1700000000"#
    );
}

#[test]
fn unmatched_category_gets_sentinel() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([
            { "category_id": "1", "name": "known" },
            { "category_id": "404", "name": "orphan" },
            { "name": "no id" }
        ]),
        &[Category::new("1", "One")],
        "live",
    );

    let lines = read_lines(out.path().unwrap());
    assert!(lines[1].starts_with("One,known,"));
    assert!(lines[2].starts_with("N/A,orphan,"));
    assert!(lines[3].starts_with("N/A,no id,"));
}

#[test]
fn duplicate_category_ids_later_name_wins() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([{ "category_id": "1", "name": "x" }]),
        &[Category::new("1", "Old"), Category::new("1", "New")],
        "live",
    );

    let lines = read_lines(out.path().unwrap());
    assert!(lines[1].starts_with("New,x,"));
}

#[test]
fn bad_added_value_kept_verbatim_with_warning() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([
            { "category_id": "1", "name": "Good", "added": "86400" },
            { "category_id": "1", "name": "Bad", "added": "soon" }
        ]),
        &[Category::new("1", "C")],
        "vod",
    );

    let lines = read_lines(out.path().unwrap());
    assert_eq!(lines[1], "C,Good,,,1970-01-02T00:00:00+00:00,,1");
    assert_eq!(lines[2], "C,Bad,,,soon,,1");
    assert_eq!(report.warnings(), vec!["Could not convert 'added' field for stream: Bad"]);
}

#[test]
fn header_is_union_of_keys_and_gaps_are_blank() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([
            { "category_id": "1", "name": "a", "zz": "z1" },
            { "category_id": "1", "name": "b", "aa": true, "tv_archive": null }
        ]),
        &[Category::new("1", "C")],
        "live",
    );

    let lines = read_lines(out.path().unwrap());
    assert_eq!(
        lines[0],
        "category_name,name,num,stream_icon,epg_channel_id,is_adult,aa,category_id,tv_archive,zz"
    );
    assert_eq!(lines[1], "C,a,,,,,,1,,z1");
    assert_eq!(lines[2], "C,b,,,,,true,1,,");
}

#[test]
fn nested_values_written_as_json_text() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([{ "category_id": "1", "name": "m", "backdrop_path": ["a.jpg"] }]),
        &[Category::new("1", "C")],
        "vod",
    );

    let lines = read_lines(out.path().unwrap());
    assert!(lines[0].ends_with(",backdrop_path,category_id"));
    assert!(lines[1].ends_with(r#","[""a.jpg""]",1"#));
}

#[test]
fn empty_records_create_no_file() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(tmp.path(), &report, json!([]), &[Category::new("1", "C")], "series");

    assert!(matches!(out, ExportOutcome::Skipped));
    assert!(file_names(tmp.path()).is_empty());
    assert_eq!(report.warnings(), vec!["No series stream data to save."]);
    assert!(report.errors().is_empty());
}

#[test]
fn unknown_content_type_fails_that_file_only() {
    let tmp = tempfile::tempdir().unwrap();
    let report = MemoryReport::new();
    let out = export_into(
        tmp.path(),
        &report,
        json!([{ "category_id": "1", "name": "x" }]),
        &[Category::new("1", "C")],
        "radio",
    );

    match out {
        ExportOutcome::Failed(ExportError::UnknownField { field, .. }) => {
            assert_eq!(field, "category_name")
        }
        other => panic!("expected UnknownField, got {other:?}"),
    }
    assert_eq!(report.errors().len(), 1);
    assert!(report.errors()[0].starts_with("Error saving radio stream data to CSV"));

    // Header went out before the bad row
    let path = tmp.path().join("acme_radio_streams_20240101T000000Z.csv");
    assert_eq!(read_lines(&path), vec!["category_id,name"]);

    // The exporter is still usable afterwards
    let next = export_into(
        tmp.path(),
        &report,
        json!([{ "category_id": "1", "name": "x" }]),
        &[Category::new("1", "C")],
        "live",
    );
    assert!(next.path().is_some());
}

#[test]
fn missing_output_dir_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("a").join("b");
    let report = MemoryReport::new();
    let out = export_into(&dir, &report, json!([{ "name": "x" }]), &[], "live");

    assert!(out.path().unwrap().starts_with(&dir));
    assert_eq!(file_names(&dir), vec!["acme_live_streams_20240101T000000Z.csv"]);
}

#[test]
fn write_failure_is_logged_not_raised() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let report = MemoryReport::new();
    let out = export_into(&blocker, &report, json!([{ "name": "x" }]), &[], "vod");

    assert!(matches!(out, ExportOutcome::Failed(ExportError::Io(_))));
    assert!(out.is_failed());
    assert_eq!(report.errors().len(), 1);
}
