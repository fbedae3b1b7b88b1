//! Command-line surface

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::logging::LogLevel;
use crate::parser::GoSource;
use crate::pipeline;
use crate::version::BumpType;

#[derive(Debug, Parser)]
#[command(name = "gobump")]
#[command(version, about = "Show or bump the semantic version declared in a Go source file")]
pub struct Cli {
    /// Go source file declaring the version
    pub file: PathBuf,

    /// Print the current version instead of the rewritten file
    #[arg(short, long)]
    pub show: bool,

    /// Version component to increment
    #[arg(short, long, value_enum, default_value_t = BumpType::Noop)]
    pub bump: BumpType,

    /// Write the result back to FILE instead of stdout
    #[arg(short, long, conflicts_with = "show")]
    pub write: bool,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Run the command, sending non-file output to `stdout`
    pub fn execute(&self, stdout: &mut impl Write) -> anyhow::Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let content = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        let source = GoSource::parse(content)
            .with_context(|| format!("failed to parse {}", self.file.display()))?;

        let mut rendered = Vec::new();
        pipeline::run(
            self.show,
            &source,
            self.bump,
            &config.library,
            &mut rendered,
        )
        .with_context(|| format!("{}", self.file.display()))?;

        if self.write {
            std::fs::write(&self.file, &rendered)
                .with_context(|| format!("failed to write {}", self.file.display()))?;
            info!(path = %self.file.display(), bump = %self.bump, "Rewrote file");
        } else {
            stdout.write_all(&rendered)?;
            stdout.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_bump_flags() {
        let cli = Cli::try_parse_from(["gobump", "--bump", "minor", "-w", "version.go"]).unwrap();
        assert_eq!(cli.bump, BumpType::Minor);
        assert!(cli.write);
        assert!(!cli.show);
        assert_eq!(cli.file, PathBuf::from("version.go"));
    }

    #[test]
    fn cli_defaults_to_noop() {
        let cli = Cli::try_parse_from(["gobump", "--show", "version.go"]).unwrap();
        assert_eq!(cli.bump, BumpType::Noop);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn cli_rejects_show_with_write() {
        assert!(Cli::try_parse_from(["gobump", "--show", "--write", "version.go"]).is_err());
    }

    #[test]
    fn cli_rejects_unknown_bump_type() {
        assert!(Cli::try_parse_from(["gobump", "--bump", "prerelease", "version.go"]).is_err());
    }
}
