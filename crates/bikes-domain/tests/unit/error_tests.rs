//! Unit tests for domain error types

use bikes_domain::Error;

#[test]
fn test_system_not_found_message_names_tag_and_system() {
    let error = Error::system_not_found("velib", "cyclocity");
    let message = error.to_string();
    assert!(message.contains("velib"));
    assert!(message.contains("cyclocity"));
    assert!(error.is_not_found());
    assert!(!error.is_data_error());
}

#[test]
fn test_unknown_provider_type_lists_available() {
    let error = Error::unknown_provider_type("Nope", vec!["Bar".into(), "Baz".into()]);
    match &error {
        Error::UnknownProviderType {
            class_name,
            available,
        } => {
            assert_eq!(class_name, "Nope");
            assert_eq!(available.len(), 2);
        }
        _ => panic!("Expected UnknownProviderType error"),
    }
    assert!(error.to_string().contains("Baz"));
    assert!(error.is_data_error());
}

#[test]
fn test_missing_credential_error() {
    let error = Error::missing_credential("cyclocity", "Cyclocity");
    match error {
        Error::MissingCredential { system, class_name } => {
            assert_eq!(system, "cyclocity");
            assert_eq!(class_name, "Cyclocity");
        }
        _ => panic!("Expected MissingCredential error"),
    }
}

#[test]
fn test_json_error_converts() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Json { .. }));
    assert!(error.to_string().starts_with("JSON parsing error"));
}

#[test]
fn test_io_with_source_keeps_source() {
    use std::error::Error as _;

    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::io_with_source("Failed to read bixi.json", io);
    assert!(error.source().is_some());
    assert!(error.to_string().contains("bixi.json"));
}
