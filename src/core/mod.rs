//! Core data model and error types.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    canonical_package_name, Declaration, ExampleEntry, FuncMap, OwnerKey, PackageCollection,
    PackageKey, TEST_PACKAGE_SUFFIX,
};
