use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use listexamples::cli::{init_logging, is_argument_count_error, usage_message, Cli};
use listexamples::commands::{handle_scan, ScanConfig};
use listexamples::config::load_config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) if is_argument_count_error(&e) => {
            println!("{}", usage_message());
            return ExitCode::from(1);
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ScanConfig {
        path: cli.path,
        gopath: cli.gopath,
        format: cli.format,
        ignore: cli.ignore,
        file_config: load_config(),
    };

    let stdout = std::io::stdout();
    handle_scan(&config, stdout.lock())
        .with_context(|| format!("listing examples in {}", config.path.display()))?;
    Ok(())
}
