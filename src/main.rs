use clap::Parser;

use gobump::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = gobump::logging::init(cli.log_level, cli.log_file.as_deref())?;

    let stdout = std::io::stdout();
    cli.execute(&mut stdout.lock())
}
