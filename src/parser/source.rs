//! Go source front-end
//!
//! Wraps a tree-sitter-go parse of one file together with its text, so the
//! locators can borrow nodes and slices from a single owner.

use tracing::warn;

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Invalid syntax in the file
    #[error("Invalid syntax at {line}:{column}")]
    InvalidSyntax { line: usize, column: usize },

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}

/// A parsed Go source file
pub struct GoSource {
    text: String,
    tree: tree_sitter::Tree,
}

impl std::fmt::Debug for GoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoSource")
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}

impl GoSource {
    pub fn parse(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_go::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set Go language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(&text, None).ok_or_else(|| {
            warn!("Failed to parse Go content");
            ParseError::ParseFailed("Failed to parse Go".to_string())
        })?;

        if let Some(broken) = first_error(tree.root_node()) {
            let point = broken.start_position();
            warn!(
                line = point.row + 1,
                column = point.column + 1,
                "Go source contains a syntax error"
            );
            return Err(ParseError::InvalidSyntax {
                line: point.row + 1,
                column: point.column + 1,
            });
        }

        Ok(Self { text, tree })
    }

    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        &self.text[node.byte_range()]
    }
}

fn first_error(node: tree_sitter::Node) -> Option<tree_sitter::Node> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() {
        return Some(node);
    }
    if node.is_missing() {
        return (!is_elided_group_terminator(node)).then_some(node);
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(first_error)
}

/// The terminator after the last spec of a one-line `( ... )` group,
/// e.g. `var (a = "1"; b = 2)`, which Go accepts without a `;` before `)`
fn is_elided_group_terminator(node: tree_sitter::Node) -> bool {
    matches!(node.kind(), ";" | "\n")
        && node.next_sibling().is_some_and(|next| next.kind() == ")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_single_line_file() {
        let source =
            GoSource::parse(r#"package main; import version "github.com/hashicorp/go-version""#)
                .unwrap();
        assert_eq!(source.root().kind(), "source_file");
    }

    #[test]
    fn parse_rejects_broken_syntax() {
        let err = GoSource::parse("package main\n\nvar v = (\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidSyntax { .. }));
    }

    #[test]
    fn parse_rejects_missing_terminator_between_declarations() {
        let err = GoSource::parse(
            r#"package main
import version "github.com/hashicorp/go-version"
var a = 1 var v = version.Must(version.NewSemver("0.1.2"))
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::InvalidSyntax { line: 3, .. }));
    }

    #[test]
    fn node_text_slices_the_source() {
        let source = GoSource::parse("package main\n").unwrap();
        let root = source.root();
        let clause = root.named_child(0).unwrap();
        assert_eq!(source.node_text(clause), "package main");
    }
}
