use crate::core::{PackageCollection, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

const PACKAGE_LEVEL_LABEL: &str = "Package level example:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &PackageCollection) -> Result<()>;
}

/// Plain-text report:
///
/// ```text
/// Package <key>
/// 	<owner>
/// 		<position>	<example name>
/// ```
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_results(&mut self, results: &PackageCollection) -> Result<()> {
        for (package, funcs) in results {
            writeln!(self.writer, "Package {package}")?;
            for (owner, examples) in funcs {
                if owner.is_package() {
                    writeln!(self.writer, "\t{PACKAGE_LEVEL_LABEL}")?;
                } else {
                    writeln!(self.writer, "\t{owner}")?;
                }

                if examples.is_empty() {
                    writeln!(
                        self.writer,
                        "\t\tNo Examples for function {owner} in package {package}"
                    )?;
                }
                for example in examples {
                    writeln!(self.writer, "\t\t{example}")?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &PackageCollection) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, results)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
