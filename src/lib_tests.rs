use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_FAILURE);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_FAILURE, EXIT_CONFIG_ERROR);
}

#[test]
fn exit_code_for_classifies_errors() {
    let config = MusicScanError::Config("bad".to_string());
    let missing = MusicScanError::PathNotFound {
        path: "/nope".into(),
    };

    assert_eq!(exit_code_for(&config), EXIT_CONFIG_ERROR);
    assert_eq!(exit_code_for(&missing), EXIT_FAILURE);
}
