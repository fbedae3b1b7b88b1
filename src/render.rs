//! Output rendering

use semver::Version;

use crate::parser::literal::quote;
use crate::parser::source::GoSource;
use crate::parser::types::Span;
use crate::version::ParsedVersion;

/// `major.minor.patch` followed by a newline
pub fn render_show(version: &Version) -> String {
    format!("{}.{}.{}\n", version.major, version.minor, version.patch)
}

/// The whole file with the literal at `span` replaced by `version`
pub fn render_bumped(source: &GoSource, span: Span, version: &ParsedVersion) -> String {
    let text = source.text();
    let replacement = quote(&version.to_string());
    let mut out = String::with_capacity(text.len() - span.range().len() + replacement.len());
    out.push_str(&text[..span.start]);
    out.push_str(&replacement);
    out.push_str(&text[span.end..]);
    out
}
