use crate::{
    generator::{errors::GenerateError, generate},
    template::{Template, Variant},
    DEFAULT_OUT_DIR,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

/// A description of a collection to generate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// The amount of items in the collection
    pub count: u32,
    /// The directory the metadata files are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// How items are numbered
    #[serde(default)]
    pub variant: Variant,
    /// Whether to write indented JSON
    #[serde(default)]
    pub pretty: bool,
    /// The template items are derived from
    pub template: Template,
}

impl Manifest {
    /// Reads a manifest from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, errors::ManifestReadError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path)
            .map_err(|e| errors::ManifestReadError::Io(path.to_path_buf(), e))?;

        let manifest = toml::from_str(&contents)
            .map_err(|e| errors::ManifestReadError::Serde(path.to_path_buf(), e))?;

        log::debug!("read manifest from {}", path.display());

        Ok(manifest)
    }

    /// Writes the metadata files of this collection
    pub fn generate(&self) -> Result<u32, GenerateError> {
        generate(
            &self.template,
            self.variant,
            self.count,
            &self.out_dir,
            self.pretty,
        )
    }
}

/// Errors that can occur when reading a manifest
pub mod errors {
    use std::path::PathBuf;
    use thiserror::Error;

    /// Errors that can occur when reading a manifest
    #[derive(Debug, Error)]
    #[non_exhaustive]
    pub enum ManifestReadError {
        /// The manifest file could not be read
        #[error("io error reading manifest file {}", .0.display())]
        Io(PathBuf, #[source] std::io::Error),

        /// The manifest file is not a valid manifest
        #[error("{} is not a valid manifest", .0.display())]
        Serde(PathBuf, #[source] toml::de::Error),
    }
}
