use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use walkdir::WalkDir;

use crate::collections::ChainedSet;
use crate::document::Document;
use crate::error::Result;

/// Loads every `.json` document under `path` into a corpus.
///
/// Each file holds one serialized [`Document`]. Files with a duplicate uri
/// are skipped; corpus identifiers are unique by contract.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let mut corpus = Vec::new();
    let mut seen = ChainedSet::new();

    for entry in WalkDir::new(path) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file()
            || entry.path().extension().map_or(true, |ext| ext != "json")
        {
            continue;
        }

        let file = File::open(entry.path())?;
        let document: Document = serde_json::from_reader(BufReader::new(file))?;

        if seen.contains(document.uri.as_str()) {
            tracing::warn!(uri = %document.uri, path = %entry.path().display(), "duplicate uri, skipping");
            continue;
        }

        seen.insert(document.uri.clone());
        corpus.push(document);
    }

    tracing::info!(documents = corpus.len(), "loaded corpus");
    Ok(corpus)
}
