//! Version layer
//!
//! # Modules
//!
//! - [`semver`]: Parsing of the version literal into a `semver::Version`
//! - [`bump`]: Bump policy (`noop`, `patch`, `minor`, `major`)

pub mod bump;
pub mod semver;

pub use bump::{BumpType, bump};
pub use self::semver::{ParsedVersion, parse_version};
