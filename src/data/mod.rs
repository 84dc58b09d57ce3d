//! Metadata extraction.
//!
//! This module opens netCDF files and reduces their attributes, dimensions and
//! variables to a normalized, ordered description.

mod dataset;
mod node;
mod reader;
pub mod source;
mod value;

pub use dataset::FileMetadata;
pub use node::{Attribute, Dimension, Variable, VariableDescriptor};
pub use reader::DataReader;
pub use source::MetadataSource;
pub use value::{format_float, normalize, AttributeValue};
