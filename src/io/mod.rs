pub mod output;
pub mod walker;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TextWriter};
pub use walker::{find_source_directories, DirectoryWalker};
