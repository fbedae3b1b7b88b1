use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Import path of the versioning library
pub const DEFAULT_IMPORT_PATH: &str = "github.com/hashicorp/go-version";

/// Function that panics on a constructor error, e.g. `version.Must`
pub const DEFAULT_WRAPPER: &str = "Must";

/// Constructors that build the version object from a string
pub const DEFAULT_CONSTRUCTORS: [&str; 1] = ["NewSemver"];

/// gobump configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub library: LibraryConfig,
}

/// Which package and calls declare the version
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LibraryConfig {
    /// Import path to look for
    pub import_path: String,
    /// Package name when the import has no explicit alias.
    /// Derived from the import path when unset.
    pub package_name: Option<String>,
    /// Name of the `Must` wrapper
    pub wrapper: String,
    /// Accepted constructor names
    pub constructors: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            import_path: DEFAULT_IMPORT_PATH.to_string(),
            package_name: None,
            wrapper: DEFAULT_WRAPPER.to_string(),
            constructors: DEFAULT_CONSTRUCTORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl LibraryConfig {
    /// The identifier a plain `import "<path>"` binds
    pub fn default_alias(&self) -> String {
        self.package_name
            .clone()
            .unwrap_or_else(|| default_package_name(&self.import_path))
    }

    pub fn is_constructor(&self, name: &str) -> bool {
        self.constructors.iter().any(|c| c == name)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one the user config file is used
    /// when present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

/// Returns the path to the user config file.
/// Uses $XDG_CONFIG_HOME/gobump/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/gobump/config.json,
/// or ./gobump/config.json if neither is available.
pub fn config_path() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
        .join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("gobump")
}

/// Package name Go tooling would guess for an import path:
/// the last element, skipping a `/vN` major suffix, without a `go-` prefix
/// and with characters invalid in identifiers removed.
pub fn default_package_name(import_path: &str) -> String {
    let mut elements = import_path.rsplit('/');
    let mut last = elements.next().unwrap_or_default();
    if is_major_suffix(last)
        && let Some(previous) = elements.next()
    {
        last = previous;
    }
    let last = last
        .strip_prefix("go-")
        .or_else(|| last.strip_suffix("-go"))
        .unwrap_or(last);
    last.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

fn is_major_suffix(element: &str) -> bool {
    element
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn config_from_empty_object_uses_defaults() {
        let result = serde_json::from_value::<Config>(json!({})).unwrap();
        assert_eq!(result, Config::default());
        assert_eq!(result.library.import_path, DEFAULT_IMPORT_PATH);
        assert_eq!(result.library.constructors, vec!["NewSemver".to_string()]);
    }

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "library": {
                "constructors": ["NewSemver", "NewVersion"]
            }
        }))
        .unwrap();

        assert_eq!(result.library.import_path, DEFAULT_IMPORT_PATH);
        assert_eq!(result.library.wrapper, "Must");
        assert!(result.library.is_constructor("NewVersion"));
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "library": {
                "importPath": "example.com/semver/v3",
                "packageName": "sv",
                "wrapper": "MustParse",
                "constructors": ["Parse"]
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                library: LibraryConfig {
                    import_path: "example.com/semver/v3".to_string(),
                    package_name: Some("sv".to_string()),
                    wrapper: "MustParse".to_string(),
                    constructors: vec!["Parse".to_string()],
                }
            }
        );
        assert_eq!(result.library.default_alias(), "sv");
    }

    #[test]
    fn from_file_reports_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn load_with_missing_explicit_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[rstest]
    #[case("github.com/hashicorp/go-version", "version")]
    #[case("github.com/Masterminds/semver/v3", "semver")]
    #[case("example.com/version-go", "version")]
    #[case("example.com/my.pkg", "mypkg")]
    #[case("version", "version")]
    fn default_package_name_follows_go_conventions(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(default_package_name(path), expected);
    }

    #[test]
    fn config_dir_with_env_uses_xdg_config_home_when_set() {
        let path = config_dir_with_env(
            Some("/custom/config".to_string()),
            Some(PathBuf::from("/home/user")),
        );
        assert_eq!(path, PathBuf::from("/custom/config/gobump"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_home() {
        let path = config_dir_with_env(None, Some(PathBuf::from("/home/user")));
        assert_eq!(path, PathBuf::from("/home/user/.config/gobump"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_current_dir() {
        let path = config_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./gobump"));
    }
}
