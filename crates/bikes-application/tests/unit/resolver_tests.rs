//! Resolution tests over explicit test registries

use std::io;
use std::sync::{Arc, Mutex};

use bikes_application::use_cases::{BikeShareService, Resolver};
use bikes_domain::{Error, SystemDefinition};
use bikes_providers::record_store::InMemoryRecordStore;
use serde_json::json;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::test_utils::test_registry;

fn service(store: InMemoryRecordStore) -> BikeShareService {
    BikeShareService::new(Arc::new(store), test_registry())
}

fn flat_store() -> InMemoryRecordStore {
    InMemoryRecordStore::new().with_record(
        "sys",
        &json!({"class": "FooProvider", "instances": [{"tag": "a", "city": "X"}]}),
    )
}

fn namespaced_store() -> InMemoryRecordStore {
    InMemoryRecordStore::new().with_record(
        "sys",
        &json!({"class": {
            "Bar": {"instances": [{"tag": "b1"}]},
            "Baz": {"instances": [{"tag": "b2"}]}
        }}),
    )
}

#[test]
fn test_flat_resolution_passes_metadata_through() {
    let provider = service(flat_store()).resolve("sys", "a", None).unwrap();

    assert_eq!(provider.provider_name(), "FooProvider");
    assert_eq!(provider.tag(), "a");
    assert_eq!(provider.metadata().get_str("city"), Some("X"));
    assert_eq!(
        provider.metadata().as_map(),
        json!({"tag": "a", "city": "X"}).as_object().unwrap()
    );
}

#[test]
fn test_extension_on_system_name_is_ignored() {
    let provider = service(flat_store()).resolve("sys.json", "a", None).unwrap();
    assert_eq!(provider.tag(), "a");
}

#[test]
fn test_namespaced_resolution_uses_owning_class() {
    let service = service(namespaced_store());

    let b2 = service.resolve("sys", "b2", None).unwrap();
    assert_eq!(b2.provider_name(), "Baz");

    let b1 = service.resolve("sys", "b1", None).unwrap();
    assert_eq!(b1.provider_name(), "Bar");
}

#[test]
fn test_absent_tag_is_system_not_found() {
    for store in [flat_store(), namespaced_store()] {
        match service(store).resolve("sys", "zzz", Some("key")) {
            Err(Error::SystemNotFound { tag, system }) => {
                assert_eq!(tag, "zzz");
                assert_eq!(system, "sys");
            }
            other => panic!("Expected SystemNotFound, got {other:?}"),
        }
    }
}

#[test]
fn test_absent_tag_wins_over_unknown_class() {
    let store = InMemoryRecordStore::new().with_record(
        "sys",
        &json!({"class": "NotRegistered", "instances": [{"tag": "a"}]}),
    );
    assert!(matches!(
        service(store).resolve("sys", "other", None),
        Err(Error::SystemNotFound { .. })
    ));
}

#[test]
fn test_authed_without_key_never_constructs() {
    // The Keyed factory panics if reached without a key
    let store = InMemoryRecordStore::new().with_record(
        "keyed",
        &json!({"class": "Keyed", "instances": [{"tag": "k1", "contract": "Paris"}]}),
    );
    match service(store).resolve("keyed", "k1", None) {
        Err(Error::MissingCredential { system, class_name }) => {
            assert_eq!(system, "keyed");
            assert_eq!(class_name, "Keyed");
        }
        other => panic!("Expected MissingCredential, got {other:?}"),
    }
}

#[test]
fn test_authed_with_key_injects_key() {
    let store = InMemoryRecordStore::new().with_record(
        "keyed",
        &json!({"class": {"Keyed": {"instances": [{"tag": "k1", "contract": "Paris"}]}}}),
    );
    let provider = service(store).resolve("keyed", "k1", Some("s3cret")).unwrap();

    assert_eq!(provider.metadata().key(), Some("s3cret"));
    assert_eq!(provider.metadata().get_str("contract"), Some("Paris"));
    assert_eq!(provider.metadata().len(), 3);
}

#[test]
fn test_key_ignored_for_unauthenticated_provider() {
    let provider = service(flat_store())
        .resolve("sys", "a", Some("unused"))
        .unwrap();
    assert!(provider.metadata().key().is_none());
}

#[test]
fn test_injection_does_not_touch_loaded_definition() {
    let definition = SystemDefinition::from_value(
        "keyed",
        json!({"class": "Keyed", "instances": [{"tag": "k1"}]}),
    )
    .unwrap();
    let registry = test_registry();
    let resolver = Resolver::new(&registry);

    resolver.resolve(&definition, "k1", Some("first")).unwrap();
    assert!(definition.find("k1").unwrap().metadata.key().is_none());
}

#[test]
fn test_unknown_class_is_unknown_provider_type() {
    let store = InMemoryRecordStore::new().with_record(
        "sys",
        &json!({"class": {"Bar": {"instances": []}, "Ghost": {"instances": [{"tag": "g"}]}}}),
    );
    match service(store).resolve("sys", "g", None) {
        Err(Error::UnknownProviderType {
            class_name,
            available,
        }) => {
            assert_eq!(class_name, "Ghost");
            assert!(available.contains(&"Bar".to_string()));
        }
        other => panic!("Expected UnknownProviderType, got {other:?}"),
    }
}

#[test]
fn test_malformed_class_fails_resolution() {
    for class in [json!(3), json!(["FooProvider"]), json!(null), json!(true)] {
        let store = InMemoryRecordStore::new()
            .with_record("sys", &json!({"class": class.clone(), "instances": [{"tag": "a"}]}));
        assert!(
            matches!(
                service(store).resolve("sys", "a", None),
                Err(Error::MalformedRecord { .. })
            ),
            "class {class} should be malformed"
        );
    }
}

#[test]
fn test_missing_record_is_record_not_found() {
    match service(flat_store()).resolve("nope", "a", None) {
        Err(Error::RecordNotFound { system }) => assert_eq!(system, "nope"),
        other => panic!("Expected RecordNotFound, got {other:?}"),
    }
}

#[test]
fn test_unparsable_record_is_json_error() {
    let store = InMemoryRecordStore::new().with_raw_record("broken", "{\"class\": [");
    assert!(matches!(
        service(store).resolve("broken", "a", None),
        Err(Error::Json { .. })
    ));
}

#[test]
fn test_first_duplicate_wins_in_flat_record() {
    let store = InMemoryRecordStore::new().with_record(
        "sys",
        &json!({"class": "FooProvider", "instances": [
            {"tag": "dup", "city": "first"},
            {"tag": "dup", "city": "second"}
        ]}),
    );
    let provider = service(store).resolve("sys", "dup", None).unwrap();
    assert_eq!(provider.metadata().get_str("city"), Some("first"));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_resolution_failures_logged_at_warn() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let _guard = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(LevelFilter::WARN)
        .finish()
        .set_default();

    let store = InMemoryRecordStore::new().with_record(
        "keyed",
        &json!({"class": "Keyed", "instances": [{"tag": "k1", "contract": "Paris"}]}),
    );
    let service = service(store);
    assert!(service.resolve("keyed", "k1", None).is_err());
    assert!(service.resolve("keyed", "missing", None).is_err());

    let output = logs.contents();
    assert_eq!(output.matches("WARN").count(), 2, "{output}");
    assert!(output.contains("Failed to resolve bike-share system"), "{output}");
    assert!(output.contains("needs a key"), "{output}");
    assert!(output.contains("missing"), "{output}");
}
