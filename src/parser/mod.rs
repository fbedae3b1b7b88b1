//! Parser layer
//! - source.rs: tree-sitter-go front-end (`GoSource`, `ParseError`)
//! - types.rs: Common types (Span, ImportBinding, CallSite, VersionLiteral)
//! - expr.rs: Structural classification of expression nodes
//! - literal.rs: Go string literal decoding
//! - imports.rs: Import resolution of the versioning library
//! - call_site.rs: Constructor call-site location
//! - declarations.rs: Top-level const/var lookup table
//! - argument.rs: Resolution of the constructor argument

pub mod argument;
pub mod call_site;
pub mod declarations;
pub mod expr;
pub mod imports;
pub mod literal;
pub mod source;
pub mod types;

pub use argument::resolve_argument;
pub use call_site::locate_call_site;
pub use declarations::DeclarationTable;
pub use imports::resolve_import;
pub use source::{GoSource, ParseError};
pub use types::{CallSite, Declaration, DeclarationKind, ImportBinding, Span, VersionLiteral};
