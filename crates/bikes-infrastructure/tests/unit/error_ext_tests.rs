//! Error context extension tests

use bikes_domain::Error;
use bikes_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
}

#[test]
fn test_io_context_wraps_as_io() {
    match failing_io().io_context("Failed to read bixi.json") {
        Err(Error::Io { message, source }) => {
            assert_eq!(message, "Failed to read bixi.json");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context_wraps_as_configuration() {
    let result = failing_io().config_context("Failed to load bikes.toml");
    match result {
        Err(Error::Configuration { message, .. }) => {
            assert!(message.starts_with("Failed to load bikes.toml"));
            assert!(message.contains("disk on fire"));
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy_on_success() {
    let ok: std::io::Result<u8> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 7);
}
