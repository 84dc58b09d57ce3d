//! Extracted file metadata.

use super::{Attribute, Dimension, Variable};
use crate::error::ItemResult;
use std::path::PathBuf;

/// Metadata of one container, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    /// Path the container was actually opened with.
    pub source: PathBuf,
    /// Global attributes.
    pub global_attributes: Vec<Attribute>,
    /// Dimensions.
    pub dimensions: Vec<Dimension>,
    /// Variables.
    pub variables: Vec<Variable>,
}

impl FileMetadata {
    /// Look up a dimension's length by name.
    ///
    /// Returns `None` when the file declares no dimension of that name.
    pub fn dimension_len(&self, name: &str) -> Option<&ItemResult<usize>> {
        self.dimensions
            .iter()
            .find(|dim| dim.name == name)
            .map(|dim| &dim.len)
    }
}
