//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the bike-share system registry
#[derive(Error, Debug)]
pub enum Error {
    /// The requested system name has no backing document
    #[error("System definition not found: {system}")]
    RecordNotFound {
        /// Normalised system name that was looked up
        system: String,
    },

    /// The document exists but does not follow a supported shape
    #[error("Malformed system {system}: {reason}")]
    MalformedRecord {
        /// System name of the offending document
        system: String,
        /// What is wrong with the document
        reason: String,
    },

    /// The tag is not present among the record's instances
    #[error("System {tag} not found in {system}")]
    SystemNotFound {
        /// Requested tag
        tag: String,
        /// System the tag was looked up in
        system: String,
    },

    /// The matched provider requires a key and none was supplied
    #[error("System {system} needs a key (provider {class_name})")]
    MissingCredential {
        /// System the tag belongs to
        system: String,
        /// Provider type that requires the key
        class_name: String,
    },

    /// The class name in a document does not map to any registered provider
    #[error("Unknown provider type '{class_name}'. Available providers: {available:?}")]
    UnknownProviderType {
        /// Class name found in the document
        class_name: String,
        /// Names registered at the time of the lookup
        available: Vec<String>,
    },

    /// Two provider entries were registered under the same name
    #[error("Provider type '{class_name}' is registered more than once")]
    DuplicateProviderType {
        /// Name shared by the conflicting entries
        class_name: String,
    },

    /// The provider rejected the instance metadata it was given
    #[error("Failed to construct {class_name}: {message}")]
    ProviderConstruction {
        /// Provider type whose factory failed
        class_name: String,
        /// Failure reported by the factory
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Registry and resolution error creation methods
impl Error {
    /// Create a record not found error
    pub fn record_not_found<S: Into<String>>(system: S) -> Self {
        Self::RecordNotFound {
            system: system.into(),
        }
    }

    /// Create a malformed record error
    pub fn malformed_record<S: Into<String>, R: Into<String>>(system: S, reason: R) -> Self {
        Self::MalformedRecord {
            system: system.into(),
            reason: reason.into(),
        }
    }

    /// Create a system (tag) not found error
    pub fn system_not_found<T: Into<String>, S: Into<String>>(tag: T, system: S) -> Self {
        Self::SystemNotFound {
            tag: tag.into(),
            system: system.into(),
        }
    }

    /// Create a missing credential error
    pub fn missing_credential<S: Into<String>, C: Into<String>>(system: S, class_name: C) -> Self {
        Self::MissingCredential {
            system: system.into(),
            class_name: class_name.into(),
        }
    }

    /// Create an unknown provider type error
    pub fn unknown_provider_type<S: Into<String>>(class_name: S, available: Vec<String>) -> Self {
        Self::UnknownProviderType {
            class_name: class_name.into(),
            available,
        }
    }

    /// Create a provider construction error
    pub fn provider_construction<C: Into<String>, M: Into<String>>(
        class_name: C,
        message: M,
    ) -> Self {
        Self::ProviderConstruction {
            class_name: class_name.into(),
            message: message.into(),
        }
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// True when the error means the caller asked for something that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RecordNotFound { .. } | Self::SystemNotFound { .. }
        )
    }

    /// True when the error points at bad bundled data or registry wiring
    /// rather than bad caller input
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. }
                | Self::UnknownProviderType { .. }
                | Self::DuplicateProviderType { .. }
                | Self::Json { .. }
        )
    }
}
