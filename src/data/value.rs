//! Normalized attribute values.

use crate::error::{ItemError, ItemResult};
use std::fmt;

/// An attribute value reduced to the handful of shapes the report knows how to print.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Any integer type, widened to 64 bits.
    Integer(i64),
    /// Any floating point type, widened to double precision.
    Float(f64),
    /// Text, always valid UTF-8.
    Text(String),
    /// An ordered sequence of values from an array attribute.
    Sequence(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Number of elements for sequences, `None` for scalars.
    pub fn element_count(&self) -> Option<usize> {
        match self {
            Self::Sequence(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Write the value the way it appears as an element of a sequence.
    ///
    /// Text elements are single-quoted.
    pub(crate) fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{}'", s),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => f.write_str(&format_float(*v)),
            Self::Text(s) => f.write_str(s),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_element(f)?;
                }
                f.write_str("]")
            },
        }
    }
}

/// Format a float so integral values keep a trailing `.0`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        let sign = if v.is_sign_positive() { "" } else { "-" };
        format!("{}inf", sign)
    } else if v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Normalize a raw attribute value read from the container.
///
/// Never panics; a value that cannot be represented becomes an [`ItemError`].
pub fn normalize(raw: netcdf::AttributeValue) -> ItemResult<AttributeValue> {
    use netcdf::AttributeValue as Raw;

    let value = match raw {
        Raw::Uchar(v) => AttributeValue::Integer(v.into()),
        Raw::Schar(v) => AttributeValue::Integer(v.into()),
        Raw::Ushort(v) => AttributeValue::Integer(v.into()),
        Raw::Short(v) => AttributeValue::Integer(v.into()),
        Raw::Uint(v) => AttributeValue::Integer(v.into()),
        Raw::Int(v) => AttributeValue::Integer(v.into()),
        Raw::Ulonglong(v) => AttributeValue::Integer(widen_u64(v)?),
        Raw::Longlong(v) => AttributeValue::Integer(v),
        Raw::Float(v) => AttributeValue::Float(v.into()),
        Raw::Double(v) => AttributeValue::Float(v),
        Raw::Str(v) => AttributeValue::Text(v),
        Raw::Uchars(v) => integers(v),
        Raw::Schars(v) => integers(v),
        Raw::Ushorts(v) => integers(v),
        Raw::Shorts(v) => integers(v),
        Raw::Uints(v) => integers(v),
        Raw::Ints(v) => integers(v),
        Raw::Ulonglongs(v) => AttributeValue::Sequence(
            v.into_iter()
                .map(|x| widen_u64(x).map(AttributeValue::Integer))
                .collect::<ItemResult<_>>()?,
        ),
        Raw::Longlongs(v) => integers(v),
        Raw::Floats(v) => floats(v),
        Raw::Doubles(v) => floats(v),
        Raw::Strs(v) => AttributeValue::Sequence(v.into_iter().map(AttributeValue::Text).collect()),
    };
    Ok(value)
}

fn widen_u64(v: u64) -> ItemResult<i64> {
    i64::try_from(v)
        .map_err(|_| ItemError::new(format!("value {} does not fit in a 64-bit signed integer", v)))
}

fn integers<T: Into<i64>>(values: Vec<T>) -> AttributeValue {
    AttributeValue::Sequence(
        values
            .into_iter()
            .map(|v| AttributeValue::Integer(v.into()))
            .collect(),
    )
}

fn floats<T: Into<f64>>(values: Vec<T>) -> AttributeValue {
    AttributeValue::Sequence(
        values
            .into_iter()
            .map(|v| AttributeValue::Float(v.into()))
            .collect(),
    )
}
