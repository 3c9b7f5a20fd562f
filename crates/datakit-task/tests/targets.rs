use std::fs;
use std::io::Write;

use serde_json::json;
use tempfile::TempDir;

use datakit_task::{copy_content, LocalTarget, SaltedOutput, TargetOutput, Task, TaskParam};

struct ReportTask {
    year: i64,
}

impl Task for ReportTask {
    fn family(&self) -> &str {
        "ReportTask"
    }
    fn version(&self) -> &str {
        "1.0"
    }
    fn params(&self) -> Vec<TaskParam> {
        vec![TaskParam::significant("year", json!(self.year))]
    }
}

#[test]
fn target_write_is_atomic_and_suffix_preserving() {
    let tmp = TempDir::new().unwrap();
    let fp = tmp.path().join("test.txt");
    let target = LocalTarget::new(&fp);

    assert!(!target.exists());
    let mut writer = target.open_write().unwrap();
    // el temporal conserva la extensión del target
    assert_eq!(writer.tmp_path().extension().unwrap(), "txt");
    let tmp_path = writer.tmp_path().to_path_buf();
    writer.write_all(b"hello").unwrap();
    assert!(!target.exists());
    writer.commit().unwrap();

    assert!(target.exists());
    assert!(!tmp_path.exists());
    assert_eq!(fs::read_to_string(&fp).unwrap(), "hello");
}

#[test]
fn open_write_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let fp = tmp.path().join("data").join("reports").join("out.csv");
    let target = LocalTarget::new(&fp);

    let mut writer = target.open_write().unwrap();
    writer.write_all(b"a,b\n1,2\n").unwrap();
    writer.commit().unwrap();
    assert!(target.exists());
}

#[test]
fn temporary_path_mode_commits_external_writes() {
    let tmp = TempDir::new().unwrap();
    let target = LocalTarget::new(tmp.path().join("blob.bin"));

    target.with_temporary_path(|p| {
        assert_eq!(p.extension().unwrap(), "bin");
        fs::write(p, b"external").map_err(datakit_io::IoError::from)
    }).unwrap();

    assert_eq!(fs::read(target.path()).unwrap(), b"external");
}

#[test]
fn copy_content_streams_a_reader_into_the_target() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src.txt");
    fs::write(&src, "I'm a temporary file for testing\nsecond line\n").unwrap();

    let target = LocalTarget::new(tmp.path().join("dest.txt"));
    let mut reader = fs::File::open(&src).unwrap();
    let bytes = copy_content(&mut reader, &target).unwrap();

    assert_eq!(bytes, fs::metadata(&src).unwrap().len());
    assert_eq!(fs::read_to_string(target.path()).unwrap(),
               fs::read_to_string(&src).unwrap());
}

#[test]
fn target_output_names_by_family() {
    let output = TargetOutput::new("/data", ".txt");
    let task = ReportTask { year: 2019 };
    assert_eq!(output.path(&task), std::path::Path::new("/data/ReportTask.txt"));
}

#[test]
fn salted_output_embeds_a_stable_short_fingerprint() {
    let output = SaltedOutput::new("/data", ".txt");
    let task = ReportTask { year: 2019 };

    let first = output.path(&task).unwrap();
    let second = output.path(&task).unwrap();
    assert_eq!(first, second);

    let name = first.file_name().unwrap().to_string_lossy().into_owned();
    // ReportTask-<8 hex>.txt
    let salt = name.strip_prefix("ReportTask-")
                   .and_then(|s| s.strip_suffix(".txt"))
                   .expect("unexpected salted name");
    assert_eq!(salt.len(), 8);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn salted_output_moves_when_the_task_changes() {
    let output = SaltedOutput::new("/data", ".txt");
    let a = output.path(&ReportTask { year: 2019 }).unwrap();
    let b = output.path(&ReportTask { year: 2020 }).unwrap();
    assert_ne!(a, b, "un parámetro significativo nuevo debe mover el output");
}
