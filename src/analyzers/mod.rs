//! Source collaborators: turn a directory of source files into packages of
//! exported function and method declarations.

use crate::core::{Declaration, Result};
use std::path::Path;

pub mod go;

pub use go::GoParser;

/// All files of a directory that share a `package` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPackage {
    pub name: String,
    /// Exported functions and methods, file order then declaration order.
    pub declarations: Vec<Declaration>,
    /// Whether the package exports any identifier at all.
    pub has_exports: bool,
}

pub trait PackageAnalyzer {
    /// Parse the source files directly inside `dir` (no recursion).
    ///
    /// Any file that fails to parse fails the whole directory.
    fn parse_directory(&mut self, dir: &Path) -> Result<Vec<ParsedPackage>>;
}
