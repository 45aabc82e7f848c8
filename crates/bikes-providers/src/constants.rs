//! Provider-specific constants

// ============================================================================
// RECORD STORE BACKENDS
// ============================================================================

/// Backend name of the store compiled into the binary
pub const BUNDLED_BACKEND: &str = "bundled";

/// Backend name of the directory store
pub const FILESYSTEM_BACKEND: &str = "filesystem";

/// Backend name of the in-memory store
pub const MEMORY_BACKEND: &str = "memory";

// ============================================================================
// PROVIDER ENDPOINTS
// ============================================================================

/// Station feed path appended to a Bixi root URL
pub const BIXI_STATIONS_PATH: &str = "bikeStations.xml";

/// Base URL of B-cycle program kiosks
pub const BCYCLE_BASE_URL: &str = "https://www.bcycle.com/stations";

/// JCDecaux open data station endpoint
pub const CYCLOCITY_API_URL: &str = "https://api.jcdecaux.com/vls/v1/stations";

/// Domoblue station feed, completed with the system id
pub const DOMOBLUE_FEED_URL: &str = "http://clientes.domoblue.es/onroll/generaMapa.php";
