use super::*;

#[test]
fn fetch_failed_message_formats_status() {
    assert_eq!(fetch_failed_message(404), "GET /data/ksp.json failed: 404");
}

#[test]
fn loading_hint_shown_while_pending() {
    assert_eq!(loading_hint(None), Some("正在载入数据…"));
}

#[test]
fn builtin_fallback_is_not_announced() {
    let dataset = LoadedDataset::resolve::<String>(Err("404".to_owned()));
    assert_eq!(loading_hint(Some(&dataset)), None);
}

#[test]
fn remote_dataset_shows_no_hint() {
    let dataset = LoadedDataset::resolve::<String>(Ok(Vec::new()));
    assert_eq!(loading_hint(Some(&dataset)), None);
}
