//! Query and bump the semantic version declared in a Go source file.
//!
//! The version is expected to be built through
//! `github.com/hashicorp/go-version`:
//!
//! ```go
//! import "github.com/hashicorp/go-version"
//!
//! var Version = version.Must(version.NewSemver("0.1.2"))
//! ```
//!
//! [`pipeline::run`] finds that call, resolves its argument (directly or
//! through one top-level `const`/`var`), and either prints the version or
//! re-emits the file with only the literal changed.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod version;

pub use error::BumpError;
pub use parser::GoSource;
pub use pipeline::{inspect, run};
pub use version::BumpType;
