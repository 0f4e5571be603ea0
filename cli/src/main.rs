//! datasets-rdf - render a directory of JKAN dataset files as one RDF graph.
//!
//! With no arguments it reads `datasets/` and writes `public/datasets.rdf`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use datasets_rdf::jkan::rdf::context::DEFAULT_BASE;
use datasets_rdf::jkan::rdf::{RdfFormat, UriScheme};
use tracing::info;

mod commands;
mod error;

#[derive(Parser, Debug)]
#[command(version, about = "Convert JKAN dataset files into DCAT/VCard RDF")]
struct Args {
    /// Directory holding one JSON dataset file per dataset
    #[arg(long, env = "DATASETS_RDF_INPUT", default_value = "datasets")]
    input: PathBuf,

    /// File the merged graph is written to (overwritten)
    #[arg(long, env = "DATASETS_RDF_OUTPUT", default_value = "public/datasets.rdf")]
    output: PathBuf,

    /// Serialization format
    #[arg(long, value_enum, default_value_t = OutputFormat::RdfXml)]
    format: OutputFormat,

    /// Base IRI for minted dataset, vcard and organization subjects
    #[arg(long, env = "DATASETS_RDF_BASE", default_value = DEFAULT_BASE)]
    base: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    RdfXml,
    Turtle,
    Ntriples,
}

impl From<OutputFormat> for RdfFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::RdfXml => RdfFormat::RdfXml,
            OutputFormat::Turtle => RdfFormat::Turtle,
            OutputFormat::Ntriples => RdfFormat::NTriples,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Starting datasets-rdf v{}", env!("CARGO_PKG_VERSION"));

    let scheme = UriScheme::with_base(&args.base);
    let summary = commands::convert(&args.input, &args.output, args.format.into(), &scheme)?;
    info!(
        "Converted {} datasets into {} triples at {}",
        summary.datasets,
        summary.triples,
        summary.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["datasets-rdf"]).unwrap();
        assert_eq!(args.format, OutputFormat::RdfXml);
        assert_eq!(args.base, DEFAULT_BASE);
    }

    #[test]
    fn test_format_flag() {
        let args = Args::try_parse_from(["datasets-rdf", "--format", "turtle"]).unwrap();
        assert_eq!(RdfFormat::from(args.format), RdfFormat::Turtle);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
