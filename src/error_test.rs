use super::*;

#[test]
fn missing_theme_store_message_names_the_provider() {
    let message = UiError::MissingThemeStore.to_string();
    assert!(message.contains("theme store not provided"));
    assert!(message.contains("<App/>"));
}

#[test]
fn storage_error_converts_transparently() {
    let err: UiError = StorageError::Write("quota exceeded".to_owned()).into();
    assert_eq!(err, UiError::Storage(StorageError::Write("quota exceeded".to_owned())));
    assert_eq!(err.to_string(), "storage write failed: quota exceeded");
}

#[test]
fn storage_unavailable_display() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
}
