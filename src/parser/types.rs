//! Common types for the Go source locators

use std::ops::Range;

/// Byte range of a node in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte (inclusive)
    pub start: usize,
    /// Byte offset after the last byte (exclusive)
    pub end: usize,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed, in bytes)
    pub column: usize,
}

impl Span {
    pub fn of(node: tree_sitter::Node) -> Self {
        let start_point = node.start_position();
        Self {
            start: node.start_byte(),
            end: node.end_byte(),
            line: start_point.row,
            column: start_point.column,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// How the versioning library is bound in the current file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Import path as written (unquoted), e.g. `github.com/hashicorp/go-version`
    pub canonical_path: String,
    /// Identifier the file uses to refer to the package
    pub local_alias: String,
    /// Whether the alias was written explicitly in the import spec
    pub explicit: bool,
}

/// Kind of a top-level declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Const,
    Var,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Var => "var",
        }
    }
}

/// A named top-level `const` or `var` with its initializer, if any
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'t> {
    pub kind: DeclarationKind,
    pub name_span: Span,
    /// `None` for `var x string` or an implicitly repeated const
    pub initializer: Option<tree_sitter::Node<'t>>,
}

/// The unique constructor invocation of the versioning library
#[derive(Debug, Clone, Copy)]
pub struct CallSite<'t> {
    /// Name of the constructor function, e.g. `NewSemver`
    pub constructor: &'t str,
    /// Whether the constructor call is wrapped by the library's `Must`
    pub wrapped: bool,
    /// The `argument_list` node of the constructor call
    pub arguments: tree_sitter::Node<'t>,
    /// Span of the whole outermost matched call
    pub span: Span,
}

/// The resolved version string and the literal to rewrite when bumping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLiteral {
    /// Decoded literal value
    pub raw_text: String,
    /// Span of the literal token, quotes included
    pub source_span: Span,
    /// Declaration name when the argument was indirected through a const/var
    pub via: Option<String>,
}
