use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".listexamples.toml";

/// Root configuration structure, read from `.listexamples.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ListExamplesConfig {
    /// Package root used when GOPATH is not set
    #[serde(default)]
    pub root: Option<String>,

    /// Glob patterns for directories to skip
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl ListExamplesConfig {
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}
