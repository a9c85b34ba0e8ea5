use crate::core::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively lists the directories below a root, the root included.
pub struct DirectoryWalker {
    root: PathBuf,
    ignore_patterns: Vec<glob::Pattern>,
}

impl DirectoryWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    /// Skip directories (and their subtrees) whose path or name matches one
    /// of the glob patterns.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore_patterns = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    /// Directories in depth-first, name-sorted order.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }

        Ok(dirs)
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        // The root itself is always searched.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        let path = entry.path().to_string_lossy();
        let ignored = self
            .ignore_patterns
            .iter()
            .any(|p| p.matches(&name) || p.matches(&path));
        if ignored {
            log::debug!("Ignoring directory {}", entry.path().display());
        }
        ignored
    }
}

pub fn find_source_directories(root: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    DirectoryWalker::new(root.to_path_buf())
        .with_ignore_patterns(ignore_patterns)?
        .walk()
}
