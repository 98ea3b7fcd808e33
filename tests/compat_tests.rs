//! Tests for CsvReaderWriter
//!
//! These tests verify the combined API keeps its historical behaviour:
//! - Writing columns and reading every line of the contacts fixture
//! - The legacy read returning true per line, then failing
//! - Mode routing and rejection of unknown mode values
//! - Tolerant double open
//! - Close disposing both components

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use addrbook_csv::{
    Config, CsvError, CsvReaderWriter, Diagnostic, LineEnding, Mode, RecordingSink,
};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn contacts_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("contacts.csv")
}

fn setup_temp_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("emptyFile.csv");
    (temp_dir, path)
}

fn recording_facade() -> (CsvReaderWriter, Arc<RecordingSink>) {
    let sink = RecordingSink::new();
    let facade = CsvReaderWriter::with_config(Config::default(), sink.clone()).unwrap();
    (facade, sink)
}

// =============================================================================
// Backwards Compatibility Tests
// =============================================================================

#[test]
fn test_writes_columns() {
    let (_temp, path) = setup_temp_path();

    let mut facade = CsvReaderWriter::new();
    facade.open(&path, Mode::Write).unwrap();
    facade.write(["Column 1A", "Column 1B"]).unwrap();
    facade.write(["Column 2A", "Column 2B"]).unwrap();
    facade.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Column 1A\tColumn 1B");
    assert_eq!(lines[1], "Column 2A\tColumn 2B");
}

#[test]
fn test_reads_all_lines() {
    let fixture = contacts_fixture();
    let contents = fs::read_to_string(&fixture).unwrap();
    let all_lines: Vec<&str> = contents.lines().collect();

    let mut facade = CsvReaderWriter::new();
    facade.open(&fixture, Mode::Read).unwrap();

    let mut line_number = 0;
    while let Some((first, second)) = facade.read().unwrap() {
        let columns: Vec<&str> = all_lines[line_number].split('\t').collect();
        assert_eq!(columns[0], first);
        assert_eq!(columns[1], second);
        line_number += 1;
    }
    facade.close().unwrap();

    assert_eq!(all_lines.len(), line_number);
}

#[test]
#[allow(deprecated)]
fn test_legacy_read_keeps_old_behaviour() {
    let fixture = contacts_fixture();
    let line_count = fs::read_to_string(&fixture).unwrap().lines().count();
    assert!(line_count > 0);

    let mut facade = CsvReaderWriter::new();
    facade.open(&fixture, Mode::Read).unwrap();

    for _ in 0..line_count {
        assert!(facade.read_legacy("", "").unwrap());
    }
    assert!(matches!(
        facade.read_legacy("", ""),
        Err(CsvError::LegacyReadExhausted)
    ));
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_called_twice_in_read_mode() {
    let fixture = contacts_fixture();
    let (mut facade, sink) = recording_facade();

    facade.open(&fixture, Mode::Read).unwrap();
    facade.open(&fixture, Mode::Read).unwrap();

    assert!(facade.read().unwrap().is_some());
    facade.close().unwrap();

    assert_eq!(
        sink.events(),
        vec![Diagnostic::AlreadyOpen {
            mode: Mode::Read,
            path: fixture,
        }]
    );
}

#[test]
fn test_open_called_twice_in_write_mode() {
    let (_temp, path) = setup_temp_path();
    let (mut facade, sink) = recording_facade();

    facade.open(&path, Mode::Write).unwrap();
    facade.open(&path, Mode::Write).unwrap();
    facade.write(["after", "reopen"]).unwrap();
    facade.close().unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
}

#[test]
fn test_open_raw_routes_known_modes() {
    let fixture = contacts_fixture();
    let (_temp, path) = setup_temp_path();

    let mut facade = CsvReaderWriter::new();
    facade.open_raw(&fixture, Mode::Read.raw()).unwrap();
    facade.open_raw(&path, Mode::Write.raw()).unwrap();

    assert!(facade.reader().is_open());
    assert!(facade.writer().is_open());
    facade.close().unwrap();
}

#[test]
fn test_open_raw_rejects_unknown_mode_without_io() {
    let (_temp, path) = setup_temp_path();

    let mut facade = CsvReaderWriter::new();
    for raw in [0, 3, -1] {
        match facade.open_raw(&path, raw) {
            Err(CsvError::InvalidMode { mode, path: reported }) => {
                assert_eq!(mode, raw);
                assert_eq!(reported, path);
            }
            other => panic!("expected InvalidMode for {}, got {:?}", raw, other),
        }
    }

    assert!(!path.exists());
    assert!(!facade.reader().is_open());
    assert!(!facade.writer().is_open());
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = Config::builder().separator('\n').build();
    let result = CsvReaderWriter::with_config(config, RecordingSink::new());
    assert!(matches!(result, Err(CsvError::Config(_))));
}

// =============================================================================
// Read / Write Routing Tests
// =============================================================================

#[test]
fn test_short_line_through_facade() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, "Just A Name\n").unwrap();
    let (mut facade, sink) = recording_facade();

    facade.open(&path, Mode::Read).unwrap();
    assert_eq!(
        facade.read().unwrap(),
        Some(("Just A Name".to_string(), String::new()))
    );
    assert!(facade.read().unwrap().is_none());
    assert_eq!(sink.events(), vec![Diagnostic::ShortLine { line_number: 1 }]);
}

#[test]
fn test_read_in_write_mode_is_uninitialized() {
    let (_temp, path) = setup_temp_path();

    let mut facade = CsvReaderWriter::new();
    facade.open(&path, Mode::Write).unwrap();

    assert!(matches!(
        facade.read(),
        Err(CsvError::UninitializedStream(Mode::Read))
    ));
}

#[test]
fn test_write_in_read_mode_is_uninitialized() {
    let fixture = contacts_fixture();

    let mut facade = CsvReaderWriter::new();
    facade.open(&fixture, Mode::Read).unwrap();

    assert!(matches!(
        facade.write(["a", "b"]),
        Err(CsvError::UninitializedStream(Mode::Write))
    ));
}

#[test]
fn test_custom_config_round_trip() {
    let (_temp, path) = setup_temp_path();
    let config = Config::builder()
        .separator('|')
        .line_ending(LineEnding::CrLf)
        .build();

    let mut facade = CsvReaderWriter::with_config(config, RecordingSink::new()).unwrap();
    facade.open(&path, Mode::Write).unwrap();
    facade.write(["a", "b", "c"]).unwrap();
    facade.close().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a|b|c\r\n");

    let mut facade = CsvReaderWriter::with_config(config, RecordingSink::new()).unwrap();
    facade.open(&path, Mode::Read).unwrap();
    assert_eq!(facade.read().unwrap(), Some(("a".to_string(), "b".to_string())));
}

// =============================================================================
// Close Tests
// =============================================================================

#[test]
fn test_close_releases_both_components() {
    let fixture = contacts_fixture();
    let (_temp, path) = setup_temp_path();

    let mut facade = CsvReaderWriter::new();
    facade.open(&fixture, Mode::Read).unwrap();
    facade.open(&path, Mode::Write).unwrap();
    facade.write(["x", "y"]).unwrap();
    facade.close().unwrap();

    assert!(!facade.reader().is_open());
    assert!(!facade.writer().is_open());
    assert_eq!(fs::read_to_string(&path).unwrap().lines().next(), Some("x\ty"));
    assert!(matches!(facade.read(), Err(CsvError::StreamClosed(Mode::Read))));
}

#[test]
fn test_close_without_open_and_twice() {
    let mut facade = CsvReaderWriter::new();
    facade.close().unwrap();
    facade.close().unwrap();
}
