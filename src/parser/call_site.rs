//! Constructor call-site location
//!
//! Searches the whole file for `alias.Must(alias.NewSemver(...))` and the
//! bare `alias.NewSemver(...)` form. Exactly one match is accepted.

use tracing::debug;

use crate::config::LibraryConfig;
use crate::error::BumpError;
use crate::parser::expr::{Expr, call_arguments};
use crate::parser::source::GoSource;
use crate::parser::types::{CallSite, Span};

/// Locate the single constructor call made through `alias`
pub fn locate_call_site<'t>(
    source: &'t GoSource,
    alias: &str,
    library: &LibraryConfig,
) -> Result<CallSite<'t>, BumpError> {
    let mut sites = Vec::new();
    collect_call_sites(source.root(), source, alias, library, &mut sites);

    match sites.len() {
        0 => Err(BumpError::ConstructorNotUsed {
            alias: alias.to_string(),
        }),
        1 => {
            let site = sites.remove(0);
            debug!(
                constructor = site.constructor,
                wrapped = site.wrapped,
                line = site.span.line + 1,
                "Located version constructor"
            );
            Ok(site)
        }
        count => Err(BumpError::AmbiguousConstructor { count }),
    }
}

fn collect_call_sites<'t>(
    node: tree_sitter::Node<'t>,
    source: &'t GoSource,
    alias: &str,
    library: &LibraryConfig,
    sites: &mut Vec<CallSite<'t>>,
) {
    if node.kind() == "call_expression" {
        let call = Expr::classify(node, source);
        if let Some(site) = match_wrapped(call, node, source, alias, library) {
            // the inner constructor belongs to this match, do not count it again
            sites.push(site);
            return;
        }
        if let Some((name, arguments)) = call.as_qualified_call(source, alias)
            && library.is_constructor(name)
        {
            sites.push(CallSite {
                constructor: name,
                wrapped: false,
                arguments,
                span: Span::of(node),
            });
            // arguments may still hold nested calls, keep walking
        }
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_call_sites(child, source, alias, library, sites);
    }
}

/// `alias.Must(alias.<constructor>(...))`
fn match_wrapped<'t>(
    call: Expr<'t>,
    node: tree_sitter::Node<'t>,
    source: &'t GoSource,
    alias: &str,
    library: &LibraryConfig,
) -> Option<CallSite<'t>> {
    let Expr::Call {
        function,
        arguments,
    } = call
    else {
        return None;
    };
    if !Expr::classify(function, source).is_selector_on(source, alias, &library.wrapper) {
        return None;
    }
    let args = call_arguments(arguments);
    let [inner] = args.as_slice() else {
        return None;
    };
    let (name, inner_arguments) =
        Expr::classify(*inner, source).as_qualified_call(source, alias)?;
    if !library.is_constructor(name) {
        return None;
    }
    Some(CallSite {
        constructor: name,
        wrapped: true,
        arguments: inner_arguments,
        span: Span::of(node),
    })
}
