mod common;

use common::{FixedRoom, session};
use game_core::{GameConfig, Position};
use runtime::{
    FileSaveRepository, Intent, MemorySaveRepository, RepositoryError, RuntimeError, SaveFile,
    SaveRepository, Session,
};
use sha2::{Digest, Sha256};

#[test]
fn file_save_restores_the_exact_state() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileSaveRepository::new(dir.path()).unwrap();

    let mut original = session(FixedRoom::empty().with("Orc", Position::new(6, 6)));
    original.handle(Intent::Wait).unwrap();
    original.save(&repository, "slot-1").unwrap();

    let restored = Session::load(
        &repository,
        "slot-1",
        GameConfig::default(),
        Box::new(FixedRoom::empty()),
    )
    .unwrap()
    .unwrap();

    assert_eq!(restored.state(), original.state());
    assert_eq!(repository.list_slots().unwrap(), vec!["slot-1".to_owned()]);
    assert!(!dir.path().join("slot-1.sav.tmp").exists());
}

#[test]
fn missing_slot_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileSaveRepository::new(dir.path()).unwrap();

    let loaded = Session::load(
        &repository,
        "never-saved",
        GameConfig::default(),
        Box::new(FixedRoom::empty()),
    )
    .unwrap();
    assert!(loaded.is_none());
}

#[test]
fn slot_names_cannot_escape_the_save_dir() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileSaveRepository::new(dir.path()).unwrap();
    let state = session(FixedRoom::empty()).into_state();

    let err = repository.save("../outside", &state).unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidSlot(_)));
}

#[test]
fn digest_is_sha256_of_the_payload() {
    let state = session(FixedRoom::empty()).into_state();
    let file = SaveFile::seal(&state).unwrap();

    assert_eq!(file.version, SaveFile::VERSION);
    assert_eq!(
        hex::encode(file.digest),
        hex::encode(Sha256::digest(&file.payload))
    );
}

#[test]
fn tampered_payload_is_rejected() {
    let repository = MemorySaveRepository::new();
    let state = session(FixedRoom::empty()).into_state();
    repository.save("main", &state).unwrap();

    let mut file = repository.raw("main").unwrap().unwrap();
    let last = file.payload.len() - 1;
    file.payload[last] ^= 0xff;
    repository.put_raw("main", file).unwrap();

    let err = repository.load("main").unwrap_err();
    assert!(matches!(err, RepositoryError::CorruptedData(_)));
}

#[test]
fn truncated_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileSaveRepository::new(dir.path()).unwrap();
    let state = session(FixedRoom::empty()).into_state();
    repository.save("main", &state).unwrap();

    let path = repository.slot_path("main").unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let err = Session::load(
        &repository,
        "main",
        GameConfig::default(),
        Box::new(FixedRoom::empty()),
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        RuntimeError::Repository(RepositoryError::CorruptedData(_))
    ));
}

#[test]
fn future_version_is_refused() {
    let repository = MemorySaveRepository::new();
    let state = session(FixedRoom::empty()).into_state();
    let mut file = SaveFile::seal(&state).unwrap();
    file.version = SaveFile::VERSION + 1;
    repository.put_raw("main", file).unwrap();

    let err = repository.load("main").unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::UnsupportedVersion { found: 2, expected: 1 }
    ));
}

#[test]
fn delete_removes_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileSaveRepository::new(dir.path()).unwrap();
    let state = session(FixedRoom::empty()).into_state();

    repository.save("main", &state).unwrap();
    assert!(repository.exists("main"));
    repository.delete("main").unwrap();
    assert!(!repository.exists("main"));
    assert!(repository.load("main").unwrap().is_none());
}
