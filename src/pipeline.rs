//! The locate-resolve-bump-render pipeline
//!
//! ```text
//! Start -> ImportResolved -> CallLocated -> ArgumentResolved -> VersionParsed
//!       -> Shown | Rendered -> Done
//! ```
//!
//! Every stage fails fast. The sink is written exactly once, after the
//! output has been fully rendered, so a failure leaves it untouched.

use std::io::Write;

use tracing::{debug, info, instrument};

use crate::config::LibraryConfig;
use crate::error::BumpError;
use crate::parser::{
    DeclarationTable, GoSource, ImportBinding, VersionLiteral, locate_call_site, resolve_argument,
    resolve_import,
};
use crate::render::{render_bumped, render_show};
use crate::version::{BumpType, ParsedVersion, bump, parse_version};

/// Everything the read-only stages learned about the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub binding: ImportBinding,
    /// Constructor that was called, e.g. `NewSemver`
    pub constructor: String,
    pub literal: VersionLiteral,
    pub version: ParsedVersion,
}

/// Resolve the version declared in `source` without rendering anything
pub fn inspect(source: &GoSource, library: &LibraryConfig) -> Result<Resolved, BumpError> {
    let binding = resolve_import(source, library)?;
    let call_site = locate_call_site(source, &binding.local_alias, library)?;
    let table = DeclarationTable::build(source);
    debug!(declarations = table.len(), "Indexed top-level declarations");
    let literal = resolve_argument(source, &call_site, &table)?;
    let version = parse_version(&literal.raw_text)?;
    debug!(version = %version, line = literal.source_span.line + 1, "Parsed version");

    Ok(Resolved {
        binding,
        constructor: call_site.constructor.to_string(),
        literal,
        version,
    })
}

/// Show or bump the version declared in `source`, writing the result to `out`.
///
/// In show mode `bump_type` is ignored and only `major.minor.patch` is
/// written. Otherwise the whole file is written with the version literal
/// replaced by the bumped version.
#[instrument(skip(source, library, out), fields(import_path = %library.import_path))]
pub fn run<W: Write>(
    show: bool,
    source: &GoSource,
    bump_type: BumpType,
    library: &LibraryConfig,
    out: &mut W,
) -> Result<(), BumpError> {
    let resolved = inspect(source, library)?;

    let rendered = if show {
        render_show(&resolved.version.version)
    } else {
        let next = resolved
            .version
            .with_version(bump(&resolved.version.version, bump_type)?);
        info!(from = %resolved.version, to = %next, "Bumped version");
        render_bumped(source, resolved.literal.source_span, &next)
    };

    out.write_all(rendered.as_bytes())?;
    Ok(())
}
