use crate::analyzers::{GoParser, PackageAnalyzer};
use crate::config::{resolve_search_path, ListExamplesConfig, PackageRoot};
use crate::core::{canonical_package_name, PackageCollection, Result};
use crate::grouping::group_declarations;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::walker::find_source_directories;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ScanConfig {
    /// Directory to search, as given on the command line
    pub path: PathBuf,
    /// GOPATH value from the flag or the environment
    pub gopath: Option<OsString>,
    pub format: Option<OutputFormat>,
    pub ignore: Vec<String>,
    pub file_config: ListExamplesConfig,
}

impl ScanConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            gopath: None,
            format: None,
            ignore: Vec::new(),
            file_config: ListExamplesConfig::default(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| self.file_config.output_format())
            .unwrap_or_default()
    }

    fn ignore_patterns(&self) -> Vec<String> {
        let mut patterns = self.file_config.ignore.clone();
        patterns.extend(self.ignore.iter().cloned());
        patterns
    }
}

/// Resolve the search path against the package root, collect every
/// package's examples, then write the report. Nothing is written unless the
/// whole tree was scanned successfully.
pub fn handle_scan<W: Write>(config: &ScanConfig, out: W) -> Result<PackageCollection> {
    let search_path = resolve_search_path(&config.path)?;
    let root = PackageRoot::resolve(
        &search_path,
        config.gopath.as_deref(),
        config.file_config.root.as_deref(),
    )?;
    log::info!(
        "Searching {} (package root {})",
        search_path.display(),
        root.path().display()
    );

    let mut analyzer = GoParser::new()?;
    let results = collect_examples(
        &mut analyzer,
        &search_path,
        &root,
        &config.ignore_patterns(),
    )?;

    create_writer(config.output_format(), out).write_results(&results)?;
    Ok(results)
}

/// Walk `search_path` and fold every discovered package into a collection.
pub fn collect_examples<A: PackageAnalyzer>(
    analyzer: &mut A,
    search_path: &Path,
    root: &PackageRoot,
    ignore_patterns: &[String],
) -> Result<PackageCollection> {
    let mut collection = PackageCollection::new();

    for dir in find_source_directories(search_path, ignore_patterns)? {
        let package_path = root.package_path(&dir);
        for package in analyzer.parse_directory(&dir)? {
            if !package.has_exports {
                log::warn!(
                    "No exported identifiers in {}",
                    canonical_package_name(&package.name)
                );
                continue;
            }
            let funcs = group_declarations(&package.declarations);
            collection.add_package(&package.name, &package_path, funcs);
        }
    }

    log::info!("Found {} packages", collection.len());
    Ok(collection)
}
