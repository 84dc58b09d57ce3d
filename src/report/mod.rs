//! Markdown report rendering.
//!
//! The report has fixed sections in a fixed order: basic information,
//! dimensions, global attributes (omitted when there are none) and variables.

mod formatters;

pub use formatters::{bytes_to_mb, format_item, format_value, MAX_SHOWN_ELEMENTS};

use crate::data::{FileMetadata, VariableDescriptor};
use std::path::Path;

/// Render the report for `metadata`.
///
/// `display_path` is shown as given; its final component is the file name.
/// `size_mb` is printed with two decimals.
pub fn render(metadata: &FileMetadata, display_path: &Path, size_mb: f64) -> String {
    let mut text = String::new();

    text.push_str("# NetCDF File Information\n\n");

    text.push_str("## Basic Information\n");
    let file_name = display_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    text.push_str(&format!("- **Filename**: {}\n", file_name));
    text.push_str(&format!("- **Path**: {}\n", display_path.display()));
    text.push_str(&format!("- **Size**: {:.2} MB\n\n", size_mb));

    text.push_str("## Dimensions\n");
    for dim in &metadata.dimensions {
        let len = match &dim.len {
            Ok(len) => len.to_string(),
            Err(e) => e.to_string(),
        };
        text.push_str(&format!("- **{}**: {}\n", dim.name, len));
    }
    text.push('\n');

    if !metadata.global_attributes.is_empty() {
        text.push_str("## Global Attributes\n");
        for attr in &metadata.global_attributes {
            text.push_str(&format!("- **{}**: {}\n", attr.name, format_item(&attr.value)));
        }
        text.push('\n');
    }

    text.push_str("## Variables\n");
    for var in &metadata.variables {
        text.push_str(&format!("### {}\n", var.name));
        match &var.descriptor {
            Ok(desc) => render_descriptor(&mut text, metadata, desc),
            Err(e) => text.push_str(&format!("- **Error**: {}\n", e.message())),
        }
        text.push('\n');
    }

    text
}

fn render_descriptor(text: &mut String, metadata: &FileMetadata, desc: &VariableDescriptor) {
    text.push_str(&format!("- **Type**: {}\n", desc.dtype));
    text.push_str(&format!("- **Shape**: {}\n", desc.shape_label()));

    let dims: Vec<String> = desc
        .dimensions
        .iter()
        .map(|name| match metadata.dimension_len(name) {
            Some(Ok(len)) => format!("{}({})", name, len),
            Some(Err(e)) => format!("{}({})", name, e),
            None => format!("{}(?)", name),
        })
        .collect();
    text.push_str(&format!("- **Dimensions**: {}\n", dims.join(", ")));

    if !desc.attributes.is_empty() {
        text.push_str("- **Attributes**:\n");
        for attr in &desc.attributes {
            text.push_str(&format!("  - {}: {}\n", attr.name, format_item(&attr.value)));
        }
    }
}
