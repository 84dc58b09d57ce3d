//! Access to the container's metadata model.

use super::Dimension;
use crate::error::{ItemError, ItemResult};
use netcdf::types::{FloatType, IntType, NcVariableType};
use std::panic::{self, AssertUnwindSafe};

/// An attribute as read from the container, before normalization.
#[derive(Debug, Clone)]
pub struct RawAttribute {
    /// Attribute name.
    pub name: String,
    /// Library value or read fault.
    pub value: ItemResult<netcdf::AttributeValue>,
}

/// A variable's metadata as read from the container.
#[derive(Debug, Clone)]
pub struct RawDescriptor {
    /// Dimension names, outermost first.
    pub dimensions: Vec<String>,
    /// Element type label.
    pub dtype: String,
    /// Per-axis extents, if the container reports them.
    pub shape: Option<Vec<usize>>,
    /// Attributes in declaration order.
    pub attributes: Vec<RawAttribute>,
}

/// A variable entry as read from the container.
#[derive(Debug, Clone)]
pub struct RawVariable {
    /// Variable name.
    pub name: String,
    /// Descriptor or the fault that prevented building it.
    pub descriptor: ItemResult<RawDescriptor>,
}

/// A readable metadata container.
///
/// Every listing is in declaration order and carries faults per item, so one
/// unreadable entry never hides its siblings.
pub trait MetadataSource {
    /// Attributes attached to the container as a whole.
    fn list_attributes(&self) -> Vec<RawAttribute>;

    /// Declared dimensions.
    fn list_dimensions(&self) -> Vec<Dimension>;

    /// Declared variables.
    fn list_variables(&self) -> Vec<RawVariable>;
}

// The netcdf crate reports several faults (non-UTF-8 names, unknown types,
// failed inquiries inside its iterators) by panicking, so every library call
// below runs under `guarded`.
impl MetadataSource for netcdf::File {
    fn list_attributes(&self) -> Vec<RawAttribute> {
        guarded_items("global attributes", || self.attributes(), |index, attr| {
            match attr {
                Ok(attr) => raw_attribute(index, &attr),
                Err(e) => RawAttribute {
                    name: placeholder_name(index),
                    value: Err(e),
                },
            }
        })
    }

    fn list_dimensions(&self) -> Vec<Dimension> {
        guarded_items("dimensions", || self.dimensions(), |index, dim| match dim {
            Ok(dim) => Dimension {
                name: guarded(|| dim.name().to_string()).unwrap_or_else(|_| placeholder_name(index)),
                len: guarded(|| dim.len()),
                unlimited: guarded(|| dim.is_unlimited()).unwrap_or(false),
            },
            Err(e) => Dimension {
                name: placeholder_name(index),
                len: Err(e),
                unlimited: false,
            },
        })
    }

    fn list_variables(&self) -> Vec<RawVariable> {
        guarded_items("variables", || self.variables(), |index, var| match var {
            Ok(var) => RawVariable {
                name: guarded(|| var.name().to_string()).unwrap_or_else(|_| placeholder_name(index)),
                descriptor: guarded(|| raw_descriptor(&var)),
            },
            Err(e) => RawVariable {
                name: placeholder_name(index),
                descriptor: Err(e),
            },
        })
    }
}

fn raw_attribute(index: usize, attr: &netcdf::Attribute<'_>) -> RawAttribute {
    RawAttribute {
        name: guarded(|| attr.name().to_string()).unwrap_or_else(|_| placeholder_name(index)),
        value: guarded(|| attr.value()).and_then(|value| value.map_err(ItemError::from)),
    }
}

fn raw_descriptor(var: &netcdf::Variable<'_>) -> RawDescriptor {
    let dims = var.dimensions();
    RawDescriptor {
        dimensions: dims.iter().map(|d| d.name().to_string()).collect(),
        dtype: type_label(&var.vartype()),
        shape: Some(dims.iter().map(|d| d.len()).collect()),
        attributes: guarded_items("variable attributes", || var.attributes(), |index, attr| {
            match attr {
                Ok(attr) => raw_attribute(index, &attr),
                Err(e) => RawAttribute {
                    name: placeholder_name(index),
                    value: Err(e),
                },
            }
        }),
    }
}

/// Name shown for an item whose own name could not be read.
fn placeholder_name(index: usize) -> String {
    format!("#{}", index)
}

/// Run `f`, turning a panic into an [`ItemError`] carrying the panic message.
pub(crate) fn guarded<T>(f: impl FnOnce() -> T) -> ItemResult<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        ItemError::new(format!("library fault: {}", message))
    })
}

/// Drain the iterator built by `make` one guarded step at a time.
///
/// A step that panics yields an `Err` entry and the walk moves on to the next
/// item. If the iterator cannot even be built, the listing is a single `Err`
/// entry.
pub(crate) fn guarded_items<I, T>(
    what: &str,
    make: impl FnOnce() -> I,
    mut convert: impl FnMut(usize, ItemResult<I::Item>) -> T,
) -> Vec<T>
where
    I: Iterator,
{
    let mut iter = match guarded(make) {
        Ok(iter) => iter,
        Err(e) => {
            tracing::warn!("Cannot list {}: {}", what, e.message());
            return vec![convert(0, Err(e))];
        },
    };

    // Without an upper bound a panicking step might never advance, so stop at the first fault.
    let limit = iter.size_hint().1;
    let mut items = Vec::new();
    loop {
        let index = items.len();
        if limit.is_some_and(|limit| index >= limit) {
            break;
        }
        match guarded(|| iter.next()) {
            Ok(Some(item)) => items.push(convert(index, Ok(item))),
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Cannot read entry {} of {}: {}", index, what, e.message());
                items.push(convert(index, Err(e)));
                if limit.is_none() {
                    break;
                }
            },
        }
    }
    items
}

/// Label for a variable's element type.
pub fn type_label(vartype: &NcVariableType) -> String {
    let label = match vartype {
        NcVariableType::Int(IntType::I8) => "int8",
        NcVariableType::Int(IntType::U8) => "uint8",
        NcVariableType::Int(IntType::I16) => "int16",
        NcVariableType::Int(IntType::U16) => "uint16",
        NcVariableType::Int(IntType::I32) => "int32",
        NcVariableType::Int(IntType::U32) => "uint32",
        NcVariableType::Int(IntType::I64) => "int64",
        NcVariableType::Int(IntType::U64) => "uint64",
        NcVariableType::Float(FloatType::F32) => "float32",
        NcVariableType::Float(FloatType::F64) => "float64",
        NcVariableType::Char => "char",
        NcVariableType::String => "str",
        // User-defined types: keep only the kind, e.g. "compound".
        other => {
            let debug = format!("{:?}", other);
            let kind = debug.split(['(', ' ', '{']).next().unwrap_or_default();
            return kind.to_lowercase();
        },
    };
    label.to_string()
}
