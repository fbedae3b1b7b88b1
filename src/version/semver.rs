use semver::Version;

use crate::error::BumpError;

/// A version parsed from the source literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    /// `v` when the literal was written as `v1.2.3`, otherwise empty
    pub prefix: &'static str,
    pub version: Version,
}

impl ParsedVersion {
    /// Same prefix, different version
    pub fn with_version(&self, version: Version) -> Self {
        Self {
            prefix: self.prefix,
            version,
        }
    }
}

impl std::fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix, self.version)
    }
}

/// Parse a version literal into a semver::Version, normalizing partial versions.
///
/// Accepts an optional leading `v` and pads partial versions like "1" or
/// "1.2" with zeros before any prerelease/build suffix.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0), prefix "v"
/// - "1.2-rc.1" -> Version(1, 2, 0-rc.1)
pub fn parse_version(raw: &str) -> Result<ParsedVersion, BumpError> {
    let (prefix, rest) = match raw.strip_prefix('v') {
        Some(rest) => ("v", rest),
        None => ("", raw),
    };

    let core_end = rest.find(['-', '+']).unwrap_or(rest.len());
    let (core, suffix) = rest.split_at(core_end);
    let normalized = match core.split('.').count() {
        1 => format!("{core}.0.0{suffix}"),
        2 => format!("{core}.0{suffix}"),
        _ => rest.to_string(),
    };

    let version = Version::parse(&normalized).map_err(|e| BumpError::InvalidVersionFormat {
        input: raw.to_string(),
        message: e.to_string(),
    })?;
    Ok(ParsedVersion { prefix, version })
}
