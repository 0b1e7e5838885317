use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};

use depsummary::parser::{self, DEFAULT_APP_DIR};
use depsummary::report::{self, ManifestSummary};

#[derive(Parser)]
#[command(name = "depsummary")]
#[command(version)]
#[command(about = "Print a sorted summary of the dependencies declared in a package.json", long_about = None)]
struct Cli {
    /// Directory containing package.json
    #[arg(default_value = DEFAULT_APP_DIR)]
    app_dir: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(1)
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = parser::manifest_path(&cli.app_dir);
    debug!(app_dir = %cli.app_dir, path = %path.display(), "resolved manifest path");

    let pkg = parser::parse_file(&path)?;
    let names = parser::extract_names(&pkg);
    let summary = ManifestSummary::new(cli.app_dir.as_str(), names);

    let mut stdout = io::stdout().lock();
    report::write_summary(&summary, &mut stdout).context("failed to write summary")?;
    stdout.flush().context("failed to write summary")?;
    Ok(())
}
