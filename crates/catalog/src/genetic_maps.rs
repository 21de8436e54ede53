//! Genetic map descriptors.
//!
//! A genetic map is an external resource: an archive URL plus a file-name
//! pattern with a `{name}` placeholder that is replaced by a chromosome name
//! to find the per-chromosome file inside the unpacked archive. Downloading
//! and parsing the files is left to other tools.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder substituted with the chromosome name in `file_pattern`.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Descriptor for a downloadable genetic map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticMap {
    /// Catalog key, e.g. "HapmapII_GRCh37"
    pub name: String,
    /// Location of the archive holding the per-chromosome files
    pub url: String,
    /// Per-chromosome file name template containing `{name}`
    pub file_pattern: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl GeneticMap {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        file_pattern: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            file_pattern: file_pattern.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// File name holding the map for `chromosome`.
    ///
    /// ```rust
    /// # use popcat_catalog::genetic_maps::GeneticMap;
    /// let map = GeneticMap::new("m", "http://example.org/m.tar.gz", "map_{name}.txt");
    /// assert_eq!(map.file_name("chr7"), "map_chr7.txt");
    /// ```
    pub fn file_name(&self, chromosome: &str) -> String {
        self.file_pattern.replace(NAME_PLACEHOLDER, chromosome)
    }

    /// Local path of the map for `chromosome` under `cache_dir`.
    ///
    /// Files are expected in a subdirectory named after the map.
    pub fn path_in(&self, cache_dir: &Path, chromosome: &str) -> PathBuf {
        cache_dir.join(&self.name).join(self.file_name(chromosome))
    }

    /// Whether the file for `chromosome` is present under `cache_dir`.
    pub fn is_cached(&self, cache_dir: &Path, chromosome: &str) -> bool {
        self.path_in(cache_dir, chromosome).is_file()
    }

    /// Whether `file_pattern` contains the `{name}` placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.file_pattern.contains(NAME_PLACEHOLDER)
    }
}
