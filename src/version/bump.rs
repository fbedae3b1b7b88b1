//! Version bump policy

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::BumpError;

/// Which component to increment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BumpType {
    /// Leave the version unchanged
    #[default]
    Noop,
    /// 1.2.3 -> 1.2.4
    Patch,
    /// 1.2.3 -> 1.3.0
    Minor,
    /// 1.2.3 -> 2.0.0
    Major,
}

impl BumpType {
    /// Returns the string representation of the bump type
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Noop => "noop",
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
        }
    }
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BumpType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noop" => Ok(BumpType::Noop),
            "patch" => Ok(BumpType::Patch),
            "minor" => Ok(BumpType::Minor),
            "major" => Ok(BumpType::Major),
            other => Err(format!("unknown bump type: {other}")),
        }
    }
}

/// Apply `bump_type` to `current`.
///
/// Any real bump drops prerelease and build metadata; `Noop` keeps them.
/// Fails instead of wrapping when the incremented component overflows.
pub fn bump(current: &Version, bump_type: BumpType) -> Result<Version, BumpError> {
    let (major, minor, patch) = match bump_type {
        BumpType::Noop => return Ok(current.clone()),
        BumpType::Patch => (
            current.major,
            current.minor,
            increment(current.patch, "patch")?,
        ),
        BumpType::Minor => (current.major, increment(current.minor, "minor")?, 0),
        BumpType::Major => (increment(current.major, "major")?, 0, 0),
    };
    Ok(Version {
        major,
        minor,
        patch,
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
    })
}

fn increment(value: u64, component: &'static str) -> Result<u64, BumpError> {
    value
        .checked_add(1)
        .ok_or(BumpError::VersionOverflow { component })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.1.2", BumpType::Noop, "0.1.2")]
    #[case("0.1.2", BumpType::Patch, "0.1.3")]
    #[case("0.1.2", BumpType::Minor, "0.2.0")]
    #[case("0.1.2", BumpType::Major, "1.0.0")]
    #[case("1.2.3-rc.1+build.7", BumpType::Noop, "1.2.3-rc.1+build.7")]
    #[case("1.2.3-rc.1+build.7", BumpType::Patch, "1.2.4")]
    #[case("1.2.3-rc.1", BumpType::Minor, "1.3.0")]
    #[case("1.2.3+build.7", BumpType::Major, "2.0.0")]
    fn bump_applies_policy(#[case] current: &str, #[case] bump_type: BumpType, #[case] expected: &str) {
        let current = Version::parse(current).unwrap();
        assert_eq!(bump(&current, bump_type).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case("0.1.18446744073709551615", BumpType::Patch, "patch")]
    #[case("0.18446744073709551615.2", BumpType::Minor, "minor")]
    #[case("18446744073709551615.1.2", BumpType::Major, "major")]
    fn bump_reports_overflow(
        #[case] current: &str,
        #[case] bump_type: BumpType,
        #[case] expected: &str,
    ) {
        let current = Version::parse(current).unwrap();
        let err = bump(&current, bump_type).unwrap_err();
        assert!(matches!(err, BumpError::VersionOverflow { component } if component == expected));
    }

    #[test]
    fn noop_keeps_max_components() {
        let current = Version::parse("18446744073709551615.0.0").unwrap();
        assert_eq!(bump(&current, BumpType::Noop).unwrap(), current);
    }

    #[rstest]
    #[case("noop", BumpType::Noop)]
    #[case("patch", BumpType::Patch)]
    #[case("minor", BumpType::Minor)]
    #[case("major", BumpType::Major)]
    fn bump_type_round_trips_through_str(#[case] text: &str, #[case] expected: BumpType) {
        let parsed: BumpType = text.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.as_str(), text);
    }

    #[test]
    fn bump_type_rejects_unknown() {
        assert!("prerelease".parse::<BumpType>().is_err());
    }
}
