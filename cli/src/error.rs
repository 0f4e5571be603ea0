use std::path::PathBuf;

use datasets_rdf::jkan::rdf::RdfError;
use datasets_rdf::jkan::ReadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Read(#[from] ReadError),
    #[error("Cannot convert `{}`: {source}", path.display())]
    Convert { path: PathBuf, source: RdfError },
    #[error("Cannot serialize graph: `{0}`")]
    Serialize(#[from] RdfError),
    #[error("Cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
