use super::*;

fn bundled_dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/ksp.json")
}

#[test]
fn bundled_dataset_parses() {
    let count = check_dataset_file(&bundled_dataset()).expect("bundled dataset should parse");
    assert!(count >= 4);
}

#[test]
fn bundled_dataset_covers_builtin_entries() {
    let body = std::fs::read_to_string(bundled_dataset()).expect("read dataset");
    let entries = chemref::dataset::parse(&body).expect("parse dataset");
    for builtin in chemref::dataset::builtin_entries() {
        let remote = entries
            .iter()
            .find(|e| e.key == builtin.key)
            .unwrap_or_else(|| panic!("missing {}", builtin.key));
        assert_eq!(remote.formula, builtin.formula);
        assert_eq!(remote.ksp_val, builtin.ksp_val);
    }
}

#[test]
fn missing_file_is_read_error() {
    let err = check_dataset_file(Path::new("/definitely/not/here/ksp.json")).unwrap_err();
    assert!(matches!(err, DatasetFileError::Read { .. }));
}
