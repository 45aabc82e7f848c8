//! Domain layer constants
//!
//! Field names and file conventions shared by every system definition
//! document, regardless of which store it was loaded from.

// ============================================================================
// DOCUMENT FIELD NAMES
// ============================================================================

/// Field holding either a class name (flat) or a class-name mapping (namespaced)
pub const CLASS_FIELD: &str = "class";

/// Field holding the ordered instance metadata sequence
pub const INSTANCES_FIELD: &str = "instances";

/// Unique identifier of one deployment inside a document
pub const TAG_FIELD: &str = "tag";

/// Descriptive metadata block of an instance
pub const META_FIELD: &str = "meta";

/// Field injected into the metadata of authenticated providers
pub const KEY_FIELD: &str = "key";

// ============================================================================
// STORAGE CONVENTIONS
// ============================================================================

/// Extension of bundled system definition documents
pub const RECORD_EXTENSION: &str = "json";
