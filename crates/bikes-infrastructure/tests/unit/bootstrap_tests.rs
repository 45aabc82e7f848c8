//! Bootstrap tests against the linked providers and record stores

use bikes_domain::Error;
use bikes_infrastructure::bootstrap::{available_backends, init_service};
use bikes_infrastructure::config::AppConfig;

#[test]
fn test_both_backends_are_linked() {
    let backends = available_backends();
    assert!(backends.contains(&"bundled"), "{backends:?}");
    assert!(backends.contains(&"filesystem"), "{backends:?}");
}

#[test]
fn test_default_config_serves_bundled_records() {
    let service = init_service(&AppConfig::default()).expect("service should build");
    let names = service.list_system_names().unwrap();
    assert!(names.contains(&"bixi".to_string()));
    assert_eq!(service.store().backend_name(), "bundled");
}

#[test]
fn test_filesystem_backend_reads_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("local.json"),
        serde_json::json!({
            "class": "DecoBike",
            "instances": [{"tag": "deco-local", "feed_url": "http://localhost/playmoves.xml"}]
        })
        .to_string(),
    )
    .unwrap();

    let mut config = AppConfig::default();
    config.records.backend = "filesystem".to_string();
    config.records.data_dir = Some(dir.path().to_path_buf());

    let service = init_service(&config).expect("service should build");
    assert_eq!(service.list_system_names().unwrap(), vec!["local"]);
    let provider = service.resolve("local", "deco-local", None).unwrap();
    assert_eq!(provider.provider_name(), "DecoBike");
}

#[test]
fn test_unknown_backend_is_configuration_error() {
    let mut config = AppConfig::default();
    config.records.backend = "s3".to_string();
    match init_service(&config) {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("s3")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
