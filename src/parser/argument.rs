//! Version argument resolution
//!
//! The constructor argument is either a string literal or an identifier
//! naming a top-level `const`/`var` initialized with one. Only that single
//! hop is followed.

use tracing::debug;

use crate::error::BumpError;
use crate::parser::declarations::DeclarationTable;
use crate::parser::expr::{Expr, call_arguments};
use crate::parser::literal::unquote;
use crate::parser::source::GoSource;
use crate::parser::types::{CallSite, Span, VersionLiteral};

/// Resolve the single argument of `call_site` to a string literal
pub fn resolve_argument(
    source: &GoSource,
    call_site: &CallSite<'_>,
    table: &DeclarationTable<'_>,
) -> Result<VersionLiteral, BumpError> {
    let args = call_arguments(call_site.arguments);
    let [argument] = args.as_slice() else {
        return Err(BumpError::InvalidArgumentCount { count: args.len() });
    };

    match Expr::classify(*argument, source) {
        Expr::StringLiteral(literal) => literal_value(source, literal, None),
        Expr::Identifier(name) => {
            let declarations = table.lookup(name);
            let declaration = match declarations {
                [declaration] => declaration,
                [] => return Err(unresolved(name, "no top-level const or var declares it")),
                many => {
                    return Err(unresolved(
                        name,
                        &format!("declared {} times at top level", many.len()),
                    ));
                }
            };
            let Some(initializer) = declaration.initializer else {
                return Err(unresolved(
                    name,
                    &format!("{} has no initializer", declaration.kind.as_str()),
                ));
            };
            match Expr::classify(initializer, source) {
                Expr::StringLiteral(literal) => {
                    debug!(
                        name,
                        kind = declaration.kind.as_str(),
                        line = declaration.name_span.line + 1,
                        "Version argument is indirected through a declaration"
                    );
                    literal_value(source, literal, Some(name))
                }
                _ => Err(unresolved(
                    name,
                    &format!(
                        "{} is not initialized with a string literal",
                        declaration.kind.as_str()
                    ),
                )),
            }
        }
        _ => Err(unresolved(
            source.node_text(*argument),
            "argument is neither a string literal nor an identifier",
        )),
    }
}

fn literal_value(
    source: &GoSource,
    literal: tree_sitter::Node<'_>,
    via: Option<&str>,
) -> Result<VersionLiteral, BumpError> {
    let raw = source.node_text(literal);
    let raw_text = unquote(raw).map_err(|e| unresolved(via.unwrap_or(raw), &e.to_string()))?;
    Ok(VersionLiteral {
        raw_text,
        source_span: Span::of(literal),
        via: via.map(str::to_string),
    })
}

fn unresolved(name: &str, reason: &str) -> BumpError {
    BumpError::UnresolvedArgument {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
