use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::core::{ListExamplesConfig, CONFIG_FILE_NAME};

/// How many directories, starting with the current one, are searched.
const MAX_SEARCH_DEPTH: usize = 10;

/// Parse the contents of a `.listexamples.toml` file.
pub fn parse_config(contents: &str) -> Result<ListExamplesConfig, String> {
    toml::from_str::<ListExamplesConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
}

/// Read one candidate file. A missing file is silent; unreadable or
/// malformed files are logged and skipped.
pub(crate) fn read_candidate(path: &Path) -> Option<ListExamplesConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    parse_config(&contents)
        .inspect(|_| log::debug!("Using {}", path.display()))
        .inspect_err(|e| log::warn!("{e}. Ignoring {}.", path.display()))
        .ok()
}

/// `start` followed by at most `max_depth - 1` of its ancestors.
pub fn directory_ancestors(start: &Path, max_depth: usize) -> Vec<PathBuf> {
    start
        .ancestors()
        .take(max_depth)
        .map(Path::to_path_buf)
        .collect()
}

/// The nearest config file at or above `start`, or defaults.
pub fn load_config_from(start: &Path) -> ListExamplesConfig {
    directory_ancestors(start, MAX_SEARCH_DEPTH)
        .iter()
        .find_map(|dir| read_candidate(&dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| {
            log::debug!("No {CONFIG_FILE_NAME} above {}", start.display());
            ListExamplesConfig::default()
        })
}

/// [`load_config_from`] the current directory.
pub fn load_config() -> ListExamplesConfig {
    std::env::current_dir()
        .map(|dir| load_config_from(&dir))
        .unwrap_or_else(|e| {
            log::warn!("Cannot determine current directory: {e}. Using defaults.");
            ListExamplesConfig::default()
        })
}
