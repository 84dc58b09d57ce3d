//! ncpreview - Markdown previews of netCDF files.
//!
//! ncpreview opens a netCDF file read-only, collects its global attributes,
//! dimensions and variables, and renders them as a Markdown report. It is
//! meant to be spawned by editor integrations as a preview generator.
//!
//! # Features
//!
//! - Declaration-order listing of attributes, dimensions and variables
//! - Attribute values normalized to integers, floats, text and sequences
//! - Unreadable items reported inline instead of aborting the run
//! - Tolerant input path resolution across mounted environments
//!
//! # Example
//!
//! ```no_run
//! use ncpreview::data::DataReader;
//! use ncpreview::report;
//! use std::path::Path;
//!
//! let metadata = DataReader::extract(Path::new("data.nc"))?;
//! print!("{}", report::render(&metadata, Path::new("data.nc"), 0.5));
//! # Ok::<(), ncpreview::PreviewError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod data;
pub mod error;
pub mod path;
pub mod report;

pub use error::{ItemError, ItemResult, PreviewError, Result};

use data::DataReader;
use std::path::Path;

/// Extract and render the report for the file at `raw_path`.
///
/// The path is shown in the report as given; its size is taken from the path
/// the container was actually opened with.
pub fn build_report(raw_path: &Path) -> Result<String> {
    let metadata = DataReader::extract(raw_path)?;
    tracing::info!("Successfully got netCDF info");

    let size_bytes = std::fs::metadata(&metadata.source)?.len();
    let size_mb = report::bytes_to_mb(size_bytes);

    Ok(report::render(&metadata, raw_path, size_mb))
}
