use semver::{Version, VersionReq};

/// Premkit shipped inside the installer before 2.13.0
const PREMKIT_DATA_DIR: &str = "/premkit/data";

/// 2.13.0 moved premkit state to a throwaway location
const PREMKIT_TMP_DATA_DIR: &str = "/tmp/premkit-data";

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "2" or "2.13" by padding with zeros.
///
/// Examples:
/// - "2" -> Version(2, 0, 0)
/// - "2.13" -> Version(2, 13, 0)
/// - "2.13.1" -> Version(2, 13, 1)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Check whether an override value is a range expression rather than an
/// exact tag.
///
/// Ranges are recognized by a leading comparison operator (">=2.38.0",
/// "~2.6", "^2.0.0") or a wildcard ("2.x", "*"). Anything starting with a
/// digit and containing no wildcard is treated as an exact tag.
pub fn is_range_spec(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.starts_with(['>', '<', '=', '^', '~', '*'])
        || trimmed.contains(['x', 'X', '*'])
        || trimmed.contains(',')
}

/// Check whether `version` satisfies the `range` expression.
///
/// Unparseable versions or ranges never satisfy.
pub fn version_satisfies(version: &str, range: &str) -> bool {
    let Some(version) = parse_version(version) else {
        return false;
    };
    let Ok(req) = VersionReq::parse(range) else {
        return false;
    };
    req.matches(&version)
}

/// Returns the premkit data directory for a replicated version.
///
/// Versions at or above 2.13.1 no longer ship premkit, signalled by an empty
/// path. Unparseable versions are treated the same way.
pub fn premkit_data_dir(version: &str) -> &'static str {
    let Some(version) = parse_version(version) else {
        return "";
    };

    if version < Version::new(2, 13, 0) {
        PREMKIT_DATA_DIR
    } else if version < Version::new(2, 13, 1) {
        PREMKIT_TMP_DATA_DIR
    } else {
        ""
    }
}
