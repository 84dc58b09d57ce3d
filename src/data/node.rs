//! Named items of a container: attributes, dimensions and variables.

use super::AttributeValue;
use crate::error::ItemResult;

/// A named attribute, attached to the file or to a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Normalized value, or the marker for a value that could not be read.
    pub value: ItemResult<AttributeValue>,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<String>, value: ItemResult<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    /// Dimension name.
    pub name: String,
    /// Current length (records written so far for unlimited dimensions).
    pub len: ItemResult<usize>,
    /// Whether the dimension can grow.
    pub unlimited: bool,
}

/// Everything known about a readable variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDescriptor {
    /// Names of the dimensions the variable is indexed over, outermost first.
    pub dimensions: Vec<String>,
    /// Element type label, e.g. `float32`.
    pub dtype: String,
    /// Per-axis extents, `None` when the container reports no shape.
    pub shape: Option<Vec<usize>>,
    /// Variable attributes in declaration order.
    pub attributes: Vec<Attribute>,
}

impl VariableDescriptor {
    /// Shape rendered as `(5, 10, 12)`; `()` for scalars and `N/A` when unknown.
    pub fn shape_label(&self) -> String {
        match &self.shape {
            Some(shape) => {
                let extents: Vec<String> = shape.iter().map(|n| n.to_string()).collect();
                format!("({})", extents.join(", "))
            },
            None => "N/A".to_string(),
        }
    }
}

/// A variable; the descriptor is replaced by a marker if it could not be built.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Variable name.
    pub name: String,
    /// Descriptor or marker.
    pub descriptor: ItemResult<VariableDescriptor>,
}
