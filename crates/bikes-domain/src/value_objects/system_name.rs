//! System name normalisation

/// Strip the last extension from a system name.
///
/// Follows path-splitting rules: only the final component is inspected,
/// and leading dots of that component never start an extension, so
/// `".json"` is returned unchanged.
///
/// ```
/// use bikes_domain::normalize_system_name;
///
/// assert_eq!(normalize_system_name("bixi.json"), "bixi");
/// assert_eq!(normalize_system_name("bixi"), "bixi");
/// assert_eq!(normalize_system_name("a.b.json"), "a.b");
/// assert_eq!(normalize_system_name(".json"), ".json");
/// ```
pub fn normalize_system_name(name: &str) -> &str {
    let file_start = name.rfind('/').map_or(0, |sep| sep + 1);
    let Some(dot) = name.rfind('.') else {
        return name;
    };
    if dot < file_start {
        return name;
    }
    if name[file_start..dot].chars().all(|c| c == '.') {
        return name;
    }
    &name[..dot]
}
