use std::fs;
use std::path::{Path, PathBuf};

use datasets_rdf::jkan::rdf::{build_dataset_graph, RdfFormat, RdfGraph, UriScheme};
use datasets_rdf::jkan::read_datasets;
use tracing::{info, warn};

use crate::error::CliError;

/// What a conversion run read and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub datasets: usize,
    pub triples: usize,
    pub output: PathBuf,
}

/// Converts every dataset file in `input` and writes the merged graph to
/// `output`.
///
/// The output file is only touched once the whole graph has been built and
/// serialized, so a bad record leaves any previous output in place.
pub fn convert(
    input: &Path,
    output: &Path,
    format: RdfFormat,
    scheme: &UriScheme,
) -> Result<Summary, CliError> {
    if !extension_matches(output, format) {
        warn!(
            "Output {} does not end in .{} for {:?} output",
            output.display(),
            format.file_extension(),
            format
        );
    }

    let datasets = read_datasets(input)?;
    info!("Read {} dataset files from {}", datasets.len(), input.display());

    let mut graph = RdfGraph::new();
    for (path, record) in &datasets {
        let fragment = build_dataset_graph(record, scheme).map_err(|source| CliError::Convert {
            path: path.clone(),
            source,
        })?;
        graph.merge(fragment);
    }

    let serialized = graph.to_string(format)?;
    write_output(output, &serialized)?;
    info!("Wrote {} triples to {}", graph.len(), output.display());

    Ok(Summary {
        datasets: datasets.len(),
        triples: graph.len(),
        output: output.to_path_buf(),
    })
}

fn extension_matches(output: &Path, format: RdfFormat) -> bool {
    output
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(format.file_extension()))
}

fn write_output(output: &Path, contents: &str) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    fs::write(output, contents).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path(relative_path: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../tests/fixtures")
            .join(relative_path)
    }

    #[test]
    fn test_convert_fixtures() {
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("public/datasets.rdf");

        let summary = convert(
            &fixture_path("datasets"),
            &output,
            RdfFormat::RdfXml,
            &UriScheme::default(),
        )
        .unwrap();

        assert_eq!(summary.datasets, 3);
        assert!(summary.triples > 0);
        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("n_dcat_dataset_campus-buildings"));
        assert!(xml.contains("n_org_facilities_management"));
    }

    #[test]
    fn test_extension_matches() {
        assert!(extension_matches(Path::new("public/datasets.rdf"), RdfFormat::RdfXml));
        assert!(extension_matches(Path::new("out.TTL"), RdfFormat::Turtle));
        assert!(!extension_matches(Path::new("public/datasets.rdf"), RdfFormat::Turtle));
        assert!(!extension_matches(Path::new("datasets"), RdfFormat::NTriples));
    }

    #[test]
    fn test_convert_overwrites_output() {
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("datasets.rdf");
        fs::write(&output, "stale content that is much longer than nothing at all").unwrap();

        convert(
            &fixture_path("datasets"),
            &output,
            RdfFormat::NTriples,
            &UriScheme::default(),
        )
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(!written.contains("stale content"));
    }

    #[test]
    fn test_convert_is_repeatable() {
        let out_dir = tempfile::tempdir().unwrap();
        let first = out_dir.path().join("first.rdf");
        let second = out_dir.path().join("second.rdf");
        let scheme = UriScheme::default();

        convert(&fixture_path("datasets"), &first, RdfFormat::RdfXml, &scheme).unwrap();
        convert(&fixture_path("datasets"), &second, RdfFormat::RdfXml, &scheme).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_invalid_record_leaves_no_output() {
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("datasets.rdf");

        let err = convert(
            &fixture_path("invalid"),
            &output,
            RdfFormat::RdfXml,
            &UriScheme::default(),
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Read(_)));
        assert!(err.to_string().contains("missing-basename.json"));
        assert!(!output.exists());
    }

    #[test]
    fn test_unmintable_iri_names_file() {
        let input = tempfile::tempdir().unwrap();
        let bad = input.path().join("bad.json");
        fs::write(
            &bad,
            r#"{"title": "t", "organization": "", "notes": "", "category": [],
                "maintainer": "", "maintainer_email": "", "basename": "has space"}"#,
        )
        .unwrap();
        let output = input.path().join("out.rdf");

        let err = convert(input.path(), &output, RdfFormat::RdfXml, &UriScheme::default()).unwrap_err();
        match err {
            CliError::Convert { path, .. } => assert_eq!(path, bad),
            other => panic!("unexpected error: {}", other),
        }
    }
}
