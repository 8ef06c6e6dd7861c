#![deny(missing_docs)]
//! A generator of numbered JSON metadata files for NFT collections.
//! Every item of a collection is derived from a single template, with its
//! 1-based index appended to the name (or stored as a level) and to the image URI.

/// Writing the metadata files of a collection
pub mod generator;
/// Reading collection manifests
pub mod manifest;
/// The collections compiled into the binary
pub mod preset;
/// Templates and the items generated from them
pub mod template;

/// The directory metadata files are written to unless configured otherwise
pub const DEFAULT_OUT_DIR: &str = "json";
