use rules_demo::logging::{LOG_FILE, setup_logging};

#[test]
fn logs_to_file_when_directory_is_configured() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");

    let guard = setup_logging(Some(&log_dir)).unwrap();
    assert!(guard.is_some());

    tracing::info!("scenario marker");
    drop(guard);

    let contents = std::fs::read_to_string(log_dir.join(LOG_FILE)).unwrap();
    assert!(contents.contains("scenario marker"));
}
