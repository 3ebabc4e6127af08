use std::fs;

use string_analyzer::{
    BackendConfig, StoreError, StringFilters, StringRepository, SubmitError, lookup, remove,
    submit,
};
use tempfile::TempDir;

#[test]
fn restart_reproduces_identical_records() {
    let tmp = TempDir::new().expect("tempdir");
    let cfg = BackendConfig::json_file(tmp.path().join("db.json"));

    let before = {
        let repo = StringRepository::open(&cfg).expect("open");
        for value in ["foo", "racecar", "hello world", "drop me"] {
            submit(&repo, value).expect("submit");
        }
        remove(&repo, "drop me").expect("remove");
        repo.snapshot().expect("snapshot")
    };

    let repo = StringRepository::open(&cfg).expect("reopen");
    assert_eq!(repo.snapshot().expect("snapshot"), before);
    assert_eq!(lookup(&repo, "racecar").expect("lookup").value, "racecar");
    assert!(matches!(
        lookup(&repo, "drop me"),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn duplicate_survives_restart_as_conflict() {
    let tmp = TempDir::new().expect("tempdir");
    let cfg = BackendConfig::json_file(tmp.path().join("db.json"));

    submit(&StringRepository::open(&cfg).unwrap(), "foo").unwrap();

    let repo = StringRepository::open(&cfg).unwrap();
    assert!(matches!(
        submit(&repo, "foo"),
        Err(SubmitError::Store(StoreError::Conflict { .. }))
    ));
    assert_eq!(repo.len().unwrap(), 1);
}

#[test]
fn document_shape_on_disk() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("db.json");
    let repo = StringRepository::open(&BackendConfig::json_file(&path)).unwrap();
    submit(&repo, "Abc").unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let record = &raw["strings"][0];
    assert_eq!(record["value"], "Abc");
    assert_eq!(record["id"], record["properties"]["sha256_hash"]);
    assert_eq!(
        record["properties"]["character_frequency_map"],
        serde_json::json!({ "a": 1, "b": 1, "c": 1 })
    );
}

#[test]
fn corrupt_document_fails_to_open() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("db.json");
    fs::write(&path, "{\"strings\": [ { \"id\": 1 } ]}").unwrap();

    let result = StringRepository::open(&BackendConfig::json_file(&path));
    assert!(matches!(result, Err(StoreError::Serde(_))));
}

#[test]
fn queries_run_over_reloaded_collection() {
    let tmp = TempDir::new().expect("tempdir");
    let cfg = BackendConfig::json_file(tmp.path().join("db.json"));
    {
        let repo = StringRepository::open(&cfg).unwrap();
        for value in ["foo", "a much longer string"] {
            submit(&repo, value).unwrap();
        }
    }

    let repo = StringRepository::open(&cfg).unwrap();
    let short = repo.query(&StringFilters::new().with_max_length(3)).unwrap();
    assert_eq!(short.len(), 1);
    assert_eq!(short[0].value, "foo");

    let long = repo.query(&StringFilters::new().with_min_length(10)).unwrap();
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].properties.word_count, 4);
}

#[test]
fn hand_edited_document_loads_only_consistent_records() {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("db.json");
    let cfg = BackendConfig::json_file(&path);
    {
        let repo = StringRepository::open(&cfg).unwrap();
        submit(&repo, "foo").unwrap();
    }

    let mut raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let mut edited = raw["strings"][0].clone();
    edited["value"] = "not foo".into();
    raw["strings"].as_array_mut().unwrap().push(edited);
    fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();

    let repo = StringRepository::open(&cfg).unwrap();
    assert_eq!(repo.len().unwrap(), 1);
    assert_eq!(lookup(&repo, "foo").unwrap().value, "foo");

    remove(&repo, "foo").unwrap();
    assert!(repo.is_empty().unwrap());

    let reopened = StringRepository::open(&cfg).unwrap();
    assert!(reopened.is_empty().unwrap());
}
