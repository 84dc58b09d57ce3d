//! Value formatters shared by the report sections.

use crate::data::AttributeValue;
use crate::error::ItemResult;

/// Sequences longer than this are truncated in the report.
pub const MAX_SHOWN_ELEMENTS: usize = 5;

/// Format an attribute value for display.
///
/// Sequences of more than [`MAX_SHOWN_ELEMENTS`] items show only the first
/// ones followed by `...` and the total count, e.g. `[1, 2, 3, 4, 5, ...] (7 elements)`.
pub fn format_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Sequence(items) if items.len() > MAX_SHOWN_ELEMENTS => {
            let head = AttributeValue::Sequence(items[..MAX_SHOWN_ELEMENTS].to_vec()).to_string();
            // Reopen the bracket to splice in the ellipsis.
            let open = &head[..head.len() - 1];
            format!("{}, ...] ({} elements)", open, items.len())
        },
        other => other.to_string(),
    }
}

/// Format an item that may have been replaced by an error marker.
pub fn format_item(value: &ItemResult<AttributeValue>) -> String {
    match value {
        Ok(v) => format_value(v),
        Err(e) => e.to_string(),
    }
}

/// Convert a size in bytes to megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
