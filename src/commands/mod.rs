//! CLI command implementations.
//!
//! - **scan**: search a tree of Go packages and report example coverage

pub mod scan;

pub use scan::{collect_examples, handle_scan, ScanConfig};
