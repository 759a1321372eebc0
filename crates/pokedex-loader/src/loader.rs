//! Dataset document loader

use crate::error::{Error, Result};
use crate::schema::DocumentDef;
use pokedex_core::Dataset;
use std::fs;
use std::path::Path;

/// Encoding of a dataset document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Upstream `data.json` layout
    Json,
    /// RON with snake_case field names
    Ron,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `.ron` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => DocumentFormat::Ron,
            _ => DocumentFormat::Json,
        }
    }
}

/// Loader for dataset documents.
///
/// Several documents may be loaded in sequence; their collections are
/// appended in load order.
pub struct Loader {
    dataset: Dataset,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            dataset: Dataset::new(),
        }
    }

    /// Load a single document file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match DocumentFormat::from_path(path) {
            DocumentFormat::Json => self.load_json_str(&content)?,
            DocumentFormat::Ron => self.load_ron_str(&content)?,
        }

        tracing::debug!(
            path = %path.display(),
            categories = self.dataset.categories.len(),
            creatures = self.dataset.creatures.len(),
            moves = self.dataset.moves.len(),
            "Loaded dataset document"
        );
        Ok(())
    }

    /// Load a document from a JSON string
    pub fn load_json_str(&mut self, content: &str) -> Result<()> {
        let doc: DocumentDef = serde_json::from_str(content)?;
        self.append(doc)
    }

    /// Load a document from a RON string
    pub fn load_ron_str(&mut self, content: &str) -> Result<()> {
        let doc: DocumentDef = ron::from_str(content)?;
        self.append(doc)
    }

    fn append(&mut self, doc: DocumentDef) -> Result<()> {
        let Dataset {
            categories,
            creatures,
            moves,
        } = doc.into_dataset()?;

        self.dataset.categories.extend(categories);
        self.dataset.creatures.extend(creatures);
        self.dataset.moves.extend(moves);
        Ok(())
    }

    /// Finish loading and return the dataset
    pub fn finish(self) -> Dataset {
        if self.dataset.is_empty() {
            tracing::warn!("Loaded dataset is empty");
        }
        self.dataset
    }

    /// Get the current dataset (for inspection during loading)
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load one dataset document from disk
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let mut loader = Loader::new();
    loader.load_file(path)?;
    Ok(loader.finish())
}
