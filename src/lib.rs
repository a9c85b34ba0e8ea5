//! Lists the documentation examples (`Example...` functions) written for
//! every exported function, method and package in a tree of Go sources.
//!
//! The pipeline, per directory:
//!
//! 1. [`analyzers::GoParser`] yields each package's exported declarations
//! 2. [`naming::classify`] decides what every declaration name is
//! 3. [`grouping::group_declarations`] builds the owner → examples map
//! 4. [`PackageCollection::add_package`] folds `foo_test` into `foo`
//!
//! and [`io::output`] renders the final collection.

pub mod aggregation;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod grouping;
pub mod io;
pub mod naming;

// Re-export commonly used types
pub use crate::core::{
    Declaration, Error, ExampleEntry, FuncMap, OwnerKey, PackageCollection, PackageKey, Result,
};

pub use crate::naming::{classify, is_prefixed_and_capitalized, Classification, DeclKind};

pub use crate::grouping::group_declarations;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::commands::{collect_examples, handle_scan, ScanConfig};
