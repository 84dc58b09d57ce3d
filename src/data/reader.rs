//! NetCDF metadata reader.

use super::source::{MetadataSource, RawAttribute, RawDescriptor};
use super::{normalize, Attribute, FileMetadata, Variable, VariableDescriptor};
use crate::error::{PreviewError, Result};
use crate::path;
use std::path::{Path, PathBuf};

/// NetCDF metadata reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Open the container at `raw_path` and extract its metadata.
    ///
    /// Only a missing file or a failure to open it is an error; unreadable
    /// attributes, dimensions or variables are embedded as markers in the result.
    pub fn extract(raw_path: &Path) -> Result<FileMetadata> {
        let resolved = path::resolve(raw_path);
        if !resolved.exists() && !raw_path.exists() {
            return Err(PreviewError::file_not_found(resolved));
        }
        tracing::info!("Trying to open file: {}", resolved.display());

        let (file, opened) = Self::open_with_fallback(&resolved, raw_path)?;
        tracing::info!("File opened successfully");

        let metadata = Self::describe(&file, opened);

        // Dropping the handle closes it too; closing explicitly surfaces the status.
        match file.close() {
            Ok(()) => tracing::info!("File closed successfully"),
            Err(e) => tracing::warn!("Failed to close file cleanly: {}", e),
        }

        Ok(metadata)
    }

    /// Open `resolved`, retrying once with `raw` if that fails.
    fn open_with_fallback(resolved: &Path, raw: &Path) -> Result<(netcdf::File, PathBuf)> {
        match netcdf::open(resolved) {
            Ok(file) => Ok((file, resolved.to_path_buf())),
            Err(first) => {
                tracing::warn!(
                    "Failed to open with normalized path ({}), trying original path...",
                    first
                );
                netcdf::open(raw)
                    .map(|file| (file, raw.to_path_buf()))
                    .map_err(|e| {
                        tracing::error!("Failed to open with original path: {}", e);
                        PreviewError::open(raw, e)
                    })
            },
        }
    }

    /// Walk a metadata source and normalize everything it lists.
    pub fn describe(source: &impl MetadataSource, opened: PathBuf) -> FileMetadata {
        tracing::info!("Reading global attributes...");
        let global_attributes = Self::read_attributes(source.list_attributes(), "global");
        tracing::info!("Found {} global attributes", global_attributes.len());

        tracing::info!("Reading dimensions...");
        let dimensions = source.list_dimensions();
        for dim in &dimensions {
            match &dim.len {
                Ok(len) => tracing::debug!(
                    "Dimension {}: {}{}",
                    dim.name,
                    len,
                    if dim.unlimited { " (unlimited)" } else { "" }
                ),
                Err(e) => tracing::warn!("Dimension {} unreadable: {}", dim.name, e.message()),
            }
        }
        tracing::info!("Found {} dimensions", dimensions.len());

        tracing::info!("Reading variables...");
        let variables: Vec<Variable> = source
            .list_variables()
            .into_iter()
            .map(|raw| {
                let descriptor = match raw.descriptor {
                    Ok(desc) => Ok(Self::read_descriptor(&raw.name, desc)),
                    Err(e) => {
                        tracing::warn!("Variable {} unreadable: {}", raw.name, e.message());
                        Err(e)
                    },
                };
                Variable {
                    name: raw.name,
                    descriptor,
                }
            })
            .collect();
        tracing::info!("Found {} variables", variables.len());

        FileMetadata {
            source: opened,
            global_attributes,
            dimensions,
            variables,
        }
    }

    fn read_descriptor(var_name: &str, raw: RawDescriptor) -> VariableDescriptor {
        tracing::debug!(
            "Variable {}: {} over ({})",
            var_name,
            raw.dtype,
            raw.dimensions.join(", ")
        );
        VariableDescriptor {
            dimensions: raw.dimensions,
            dtype: raw.dtype,
            shape: raw.shape,
            attributes: Self::read_attributes(raw.attributes, var_name),
        }
    }

    fn read_attributes(raw: Vec<RawAttribute>, owner: &str) -> Vec<Attribute> {
        raw.into_iter()
            .map(|attr| {
                let value = attr.value.and_then(normalize);
                match &value {
                    Ok(v) => tracing::debug!("Attribute {}:{} = {}", owner, attr.name, v),
                    Err(e) => {
                        tracing::warn!("Attribute {}:{} unreadable: {}", owner, attr.name, e.message())
                    },
                }
                Attribute::new(attr.name, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::RawVariable;
    use crate::data::{AttributeValue, Dimension};
    use crate::error::ItemError;
    use netcdf::AttributeValue as Raw;

    /// In-memory container with scripted faults.
    struct FakeSource {
        attributes: Vec<RawAttribute>,
        dimensions: Vec<Dimension>,
        variables: Vec<RawVariable>,
    }

    impl MetadataSource for FakeSource {
        fn list_attributes(&self) -> Vec<RawAttribute> {
            self.attributes.clone()
        }

        fn list_dimensions(&self) -> Vec<Dimension> {
            self.dimensions.clone()
        }

        fn list_variables(&self) -> Vec<RawVariable> {
            self.variables.clone()
        }
    }

    fn attr(name: &str, value: std::result::Result<Raw, &str>) -> RawAttribute {
        RawAttribute {
            name: name.to_string(),
            value: value.map_err(ItemError::new),
        }
    }

    fn dim(name: &str, len: usize) -> Dimension {
        Dimension {
            name: name.to_string(),
            len: Ok(len),
            unlimited: false,
        }
    }

    fn fake() -> FakeSource {
        FakeSource {
            attributes: vec![
                attr("title", Ok(Raw::Str("demo".into()))),
                attr("broken", Err("HDF error")),
                attr("count", Ok(Raw::Ulonglong(u64::MAX))),
            ],
            dimensions: vec![
                dim("y", 3),
                Dimension {
                    name: "bad".to_string(),
                    len: Err(ItemError::new("no length")),
                    unlimited: true,
                },
                dim("x", 4),
            ],
            variables: vec![
                RawVariable {
                    name: "first".to_string(),
                    descriptor: Err(ItemError::new("cannot inquire variable")),
                },
                RawVariable {
                    name: "second".to_string(),
                    descriptor: Ok(RawDescriptor {
                        dimensions: vec!["y".into(), "x".into()],
                        dtype: "int16".into(),
                        shape: Some(vec![3, 4]),
                        attributes: vec![
                            attr("scale_factor", Ok(Raw::Double(0.5))),
                            attr("flag_values", Err("unsupported type")),
                        ],
                    }),
                },
            ],
        }
    }

    #[test]
    fn describe_keeps_declaration_order() {
        let meta = DataReader::describe(&fake(), PathBuf::from("fake.nc"));

        let names: Vec<&str> = meta.global_attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["title", "broken", "count"]);

        let names: Vec<&str> = meta.dimensions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["y", "bad", "x"]);

        let names: Vec<&str> = meta.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(meta.source, PathBuf::from("fake.nc"));
    }

    #[test]
    fn faults_stay_local_to_their_item() {
        let meta = DataReader::describe(&fake(), PathBuf::from("fake.nc"));

        assert_eq!(
            meta.global_attributes[0].value,
            Ok(AttributeValue::Text("demo".into()))
        );
        assert_eq!(
            meta.global_attributes[1].value,
            Err(ItemError::new("HDF error"))
        );
        assert!(meta.global_attributes[2].value.is_err());

        assert!(meta.dimensions[1].len.is_err());
        assert_eq!(meta.dimensions[2].len, Ok(4));

        assert_eq!(
            meta.variables[0].descriptor,
            Err(ItemError::new("cannot inquire variable"))
        );

        let second = meta.variables[1].descriptor.as_ref().unwrap();
        assert_eq!(second.dtype, "int16");
        assert_eq!(second.attributes.len(), 2);
        assert_eq!(second.attributes[0].value, Ok(AttributeValue::Float(0.5)));
        assert_eq!(second.attributes[1].name, "flag_values");
        assert!(second.attributes[1].value.is_err());
    }

    #[test]
    fn extract_missing_file_is_not_found() {
        let err = DataReader::extract(Path::new("/definitely/not/here.nc")).unwrap_err();
        assert!(matches!(err, PreviewError::FileNotFound { .. }));
    }

    #[test]
    fn extract_garbage_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.nc");
        std::fs::write(&path, "not a netCDF file").unwrap();

        let err = DataReader::extract(&path).unwrap_err();
        assert!(matches!(err, PreviewError::Open { .. }));
    }
}
