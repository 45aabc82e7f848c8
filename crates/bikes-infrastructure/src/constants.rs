//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `bikes_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bikes.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bikes";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BIKES";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "BIKES_LOG";

/// File name prefix of rolled log files
pub const LOG_FILE_PREFIX: &str = "bikes";
