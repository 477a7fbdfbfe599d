use plcsnap_load::{JsonProjectLoader, LoadError, ProjectLoader};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("plant.json");
    fs::write(
        &path,
        r#"{
            "structure": {
                "name": "Project",
                "children": [
                    { "name": "Line 1", "structured_name": "Line 1", "kind": { "type": "station" } }
                ]
            }
        }"#,
    )
    .unwrap();

    let project = JsonProjectLoader::new().load(&path, None).unwrap();
    assert_eq!(project.stations().count(), 1);
}

#[test]
fn test_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = JsonProjectLoader::new()
        .load(&temp.path().join("missing.json"), None)
        .unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
}
