//! Configuration: the optional `.listexamples.toml` file and package root
//! resolution.

mod core;
mod loader;
pub mod root;

pub use self::core::{ListExamplesConfig, OutputConfig, CONFIG_FILE_NAME};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_config};
pub use root::{resolve_search_path, PackageRoot};
