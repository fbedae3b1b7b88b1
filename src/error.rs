use thiserror::Error;

/// Failures of the locate-resolve-bump-render pipeline
#[derive(Debug, Error)]
pub enum BumpError {
    #[error("package {path} is not imported")]
    ImportNotFound { path: String },

    #[error("{form} import of {path} is not supported")]
    UnsupportedImport { path: String, form: &'static str },

    #[error("package {path} is imported more than once")]
    DuplicateImport { path: String },

    #[error("no version constructor of {alias} is used")]
    ConstructorNotUsed { alias: String },

    #[error("found {count} version constructor calls, expected exactly one")]
    AmbiguousConstructor { count: usize },

    #[error("version constructor takes {count} arguments, expected exactly one")]
    InvalidArgumentCount { count: usize },

    #[error("cannot resolve version argument {name}: {reason}")]
    UnresolvedArgument { name: String, reason: String },

    #[error("invalid version format {input:?}: {message}")]
    InvalidVersionFormat { input: String, message: String },

    #[error("cannot bump {component}: value would overflow")]
    VersionOverflow { component: &'static str },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
