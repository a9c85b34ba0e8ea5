use crate::io::output::OutputFormat;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// List the examples written for every exported function, method and
/// package of a tree of Go sources.
#[derive(Parser, Debug)]
#[command(name = "listexamples", version, about, long_about = None)]
pub struct Cli {
    /// Directory to search recursively; must be inside GOPATH
    pub path: PathBuf,

    /// Report format (default: text, or `output.format` from .listexamples.toml)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Package root, a path list like GOPATH
    #[arg(long, env = "GOPATH", value_name = "PATH")]
    pub gopath: Option<OsString>,

    /// Glob pattern of directories to skip (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Message shown when the positional argument count is wrong.
pub fn usage_message() -> String {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    format!(
        "Incorrect usage:\nPlease use \"{name} path{sep}to{sep}search{sep}\"\n\n{usage}",
        sep = MAIN_SEPARATOR,
        usage = command.render_usage()
    )
}

/// True when `error` only says the positional argument count is wrong.
/// Flag and value errors keep clap's own message.
pub fn is_argument_count_error(error: &clap::Error) -> bool {
    match error.kind() {
        ErrorKind::MissingRequiredArgument => true,
        ErrorKind::UnknownArgument => matches!(
            error.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if !arg.starts_with('-')
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_path_and_flags() {
        let cli = Cli::try_parse_from([
            "listexamples",
            "--format",
            "json",
            "--ignore",
            "vendor",
            "-vv",
            "src/acme",
        ])
        .unwrap();

        assert_eq!(cli.path, PathBuf::from("src/acme"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.ignore, vec!["vendor"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert!(Cli::try_parse_from(["listexamples"]).is_err());
        assert!(Cli::try_parse_from(["listexamples", "a", "b"]).is_err());
    }

    #[test]
    fn test_argument_count_errors_are_told_apart_from_flag_errors() {
        let missing = Cli::try_parse_from(["listexamples"]).unwrap_err();
        assert!(is_argument_count_error(&missing));

        let extra = Cli::try_parse_from(["listexamples", "a", "b"]).unwrap_err();
        assert!(is_argument_count_error(&extra));

        let bad_format = Cli::try_parse_from(["listexamples", "--format", "xml", "a"]).unwrap_err();
        assert_eq!(bad_format.kind(), ErrorKind::InvalidValue);
        assert!(!is_argument_count_error(&bad_format));

        let unknown_flag = Cli::try_parse_from(["listexamples", "--bogus", "a"]).unwrap_err();
        assert!(!is_argument_count_error(&unknown_flag));
    }

    #[test]
    fn test_usage_message_names_binary() {
        assert!(usage_message().starts_with("Incorrect usage:\nPlease use \"listexamples path"));
    }
}
