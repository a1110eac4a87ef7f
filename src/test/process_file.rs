use crate::console::{LoadError, ProcessFile};
use crate::sched::{ProcessId, SrtfSimulator, Violation};

#[test]
fn parses_processes_with_optional_unit() {
    let raw = r#"
    {
        "processes": [
            { "id": 1, "arrival": 0, "burst": 5 },
            { "id": 2, "arrival": 1, "burst": 3 }
        ]
    }
    "#;
    let file = ProcessFile::parse(raw).expect("parse process file");
    assert!(file.unit.is_none());
    assert_eq!(file.processes.len(), 2);

    let set = file.to_process_set().expect("admit");
    let s = SrtfSimulator::new(set).run().expect("run");
    assert_eq!(s.trace().horizon().0, 8);
}

#[test]
fn unit_is_read_when_present() {
    let raw = r#"{ "unit": "s", "processes": [ { "id": 1, "arrival": 0, "burst": 1 } ] }"#;
    let file = ProcessFile::parse(raw).expect("parse process file");
    assert_eq!(file.unit.as_deref(), Some("s"));
}

#[test]
fn rejected_entry_reports_its_index() {
    let raw = r#"
    { "processes": [
        { "id": 1, "arrival": 0, "burst": 5 },
        { "id": 1, "arrival": 0, "burst": 0 }
    ] }
    "#;
    let file = ProcessFile::parse(raw).expect("parse process file");
    match file.to_process_set() {
        Err(LoadError::Rejected { index, source }) => {
            assert_eq!(index, 1);
            assert_eq!(source.id, ProcessId(1));
            assert_eq!(
                source.violations,
                vec![Violation::DuplicateId, Violation::NonPositiveBurst(0)]
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ProcessFile::parse(r#"{ "processes": [ { "id": 1 } ] }"#).expect_err("missing fields");
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("srtf-sim-no-such-file.json");
    let err = ProcessFile::load(&path).expect_err("missing file");
    assert!(matches!(err, LoadError::Io { .. }));
}
