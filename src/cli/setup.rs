//! Runtime setup for the CLI: logging initialisation.

use log::LevelFilter;

/// Map `-v` occurrences to a log level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the env_logger backend. `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();

    if let Err(e) = result {
        // Already initialised (tests); keep the existing logger
        eprintln!("Note: Logger already configured: {}", e);
    }
}
