use std::fs;
use std::io::Write;
use std::path::PathBuf;

use datakit_io::{atomic_write, atomic_write_path, AtomicWriteFile, IoError, LocalBackend,
                 StorageBackend};
use tempfile::TempDir;

/// Fallo inyectado dentro del scope de escritura.
#[derive(Debug)]
enum TestError {
    Fake,
    Io(IoError),
}

impl From<IoError> for TestError {
    fn from(e: IoError) -> Self {
        TestError::Io(e)
    }
}

impl From<std::io::Error> for TestError {
    fn from(e: std::io::Error) -> Self {
        TestError::Io(IoError::from(e))
    }
}

#[test]
fn file_exists_after_successful_write() {
    let tmp = TempDir::new().unwrap();
    let fp = tmp.path().join("asdf.txt");

    let mut seen_tmp = PathBuf::new();
    atomic_write(&fp, |f| {
        // el destino no debe materializarse hasta el commit
        assert!(!f.target().exists());
        seen_tmp = f.tmp_path().to_path_buf();
        f.write_all(b"asdf")?;
        Ok::<_, IoError>(())
    }).unwrap();

    assert!(!seen_tmp.exists(), "el temporal debe desaparecer tras commit");
    assert_eq!(fs::read_to_string(&fp).unwrap(), "asdf");
}

#[test]
fn failure_inside_scope_leaves_no_trace() {
    let tmp = TempDir::new().unwrap();
    let fp = tmp.path().join("asdf.txt");

    let mut seen_tmp = PathBuf::new();
    let result: Result<(), TestError> = atomic_write(&fp, |f| {
        seen_tmp = f.tmp_path().to_path_buf();
        assert!(seen_tmp.exists());
        f.write_all(b"partial")?;
        Err(TestError::Fake)
    });

    assert!(matches!(result, Err(TestError::Fake)), "el error original debe propagarse");
    assert!(!seen_tmp.exists(), "el temporal debe borrarse tras el fallo");
    assert!(!fp.exists(), "el destino no debe existir tras el fallo");
}

#[test]
fn existing_target_is_rejected_without_side_effects() {
    let tmp = TempDir::new().unwrap();
    let fp = tmp.path().join("already.txt");
    fs::write(&fp, "already here!").unwrap();

    let result: Result<(), IoError> = atomic_write(&fp, |_f| {
        panic!("el scope no debe abrirse si el destino existe");
    });

    assert!(matches!(result, Err(IoError::AlreadyExists { .. })));
    assert_eq!(fs::read_to_string(&fp).unwrap(), "already here!");
    // único archivo del directorio: ningún temporal quedó atrás
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn path_mode_yields_temp_path_with_same_suffix() {
    let tmp = TempDir::new().unwrap();
    let fp = tmp.path().join("asdf.txt");

    atomic_write_path(&fp, |p| {
        assert_eq!(p.extension().unwrap(), "txt");
        assert_ne!(p, fp);
        fs::write(p, "by path").map_err(IoError::from)
    }).unwrap();

    assert_eq!(fs::read_to_string(&fp).unwrap(), "by path");
}

#[test]
fn temp_name_preserves_parquet_suffix() {
    let tmp = TempDir::new().unwrap();
    let writer = AtomicWriteFile::create(tmp.path().join("data.parquet")).unwrap();
    let name = writer.tmp_path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("tmp-"), "got {name}");
    assert!(name.ends_with(".parquet"), "got {name}");
}

#[test]
fn temp_name_keeps_only_final_extension_component() {
    let tmp = TempDir::new().unwrap();
    let writer = AtomicWriteFile::create(tmp.path().join("archive.tar.gz")).unwrap();
    let name = writer.tmp_path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.ends_with(".gz"), "got {name}");
    assert!(!name.ends_with(".tar.gz"), "got {name}");
}

#[test]
fn missing_parent_directory_is_reported() {
    let tmp = TempDir::new().unwrap();
    let fp = tmp.path().join("nope").join("deep.txt");
    let result = AtomicWriteFile::create(&fp);
    assert!(matches!(result, Err(IoError::NoParentDir { .. })));
}

#[test]
fn local_backend_covers_the_four_primitives() {
    let tmp = TempDir::new().unwrap();
    let backend = LocalBackend;
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("b.txt");

    assert!(!backend.exists(&a));
    let mut w = backend.open_write(&a).unwrap();
    w.write_all(b"uno").unwrap();
    w.commit().unwrap();
    assert!(backend.exists(&a));

    backend.rename(&a, &b).unwrap();
    assert!(!backend.exists(&a));
    assert!(backend.exists(&b));

    backend.delete(&b).unwrap();
    assert!(!backend.exists(&b));
}
