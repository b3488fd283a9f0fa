use super::*;

#[test]
fn storage_write_error_names_key_and_reason() {
    let err = SiteError::StorageWrite { key: "hyundai-coupe-theme".into(), reason: "quota".into() };
    assert_eq!(err.to_string(), "failed to persist hyundai-coupe-theme: quota");
}

#[test]
fn unavailable_storage_has_stable_message() {
    assert_eq!(SiteError::StorageUnavailable.to_string(), "preference storage is unavailable");
}

#[test]
fn or_log_passes_success_through() {
    let ok: Result<u8, String> = Ok(7);
    assert_eq!(ok.or_log("read"), Some(7));
}

#[test]
fn or_log_maps_error_to_none() {
    let err: Result<u8, String> = Err("boom".into());
    assert_eq!(err.or_log("read"), None);
}
