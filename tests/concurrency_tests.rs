//! Concurrency and thread safety tests for the repository

use std::sync::Arc;
use std::thread;
use string_analyzer::{
    BackendConfig, StoreError, StringRepository, SubmitError, identity_of, submit,
};
use tempfile::TempDir;

#[test]
fn concurrent_distinct_submissions_all_land() {
    let tmp = TempDir::new().expect("tempdir");
    let cfg = BackendConfig::json_file(tmp.path().join("db.json"));
    let repo = Arc::new(StringRepository::open(&cfg).expect("open"));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || submit(&repo, &format!("value-{i}")).expect("submit"))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(repo.len().unwrap(), 16);

    // Every mutation was persisted before returning, so a fresh open sees all of them.
    let reopened = StringRepository::open(&cfg).expect("reopen");
    assert_eq!(reopened.len().unwrap(), 16);
    for i in 0..16 {
        let id = identity_of(&format!("value-{i}"));
        assert!(reopened.find_by_id(&id).is_ok(), "value-{i} missing");
    }
}

#[test]
fn concurrent_duplicate_submissions_store_exactly_one() {
    let repo = Arc::new(StringRepository::open(&BackendConfig::in_memory()).expect("open"));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || submit(&repo, "contended"))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let created = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(SubmitError::Store(StoreError::Conflict { .. }))))
        .count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 9);
    assert_eq!(repo.len().unwrap(), 1);
}
