//! Synthetic netCDF files for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write the reference file: time (unlimited, 5 records) x lat (10) x lon (12),
/// coordinate variables and a `temp` variable with three attributes.
pub fn write_sample(path: &Path) -> Result<(), netcdf::Error> {
    let mut file = netcdf::create(path)?;

    file.add_unlimited_dimension("time")?;
    file.add_dimension("lat", 10)?;
    file.add_dimension("lon", 12)?;

    file.add_attribute("description", "Example netCDF file for testing")?;
    file.add_attribute("history", "Created for preview testing")?;
    file.add_attribute("source", "Test data")?;

    {
        let mut time = file.add_variable::<f32>("time", &["time"])?;
        time.put_values(&[0.0f32, 1.0, 2.0, 3.0, 4.0], (0usize..5,))?;
    }
    {
        let mut lat = file.add_variable::<f32>("lat", &["lat"])?;
        let values: Vec<f32> = (0..10).map(|v| v as f32).collect();
        lat.put_values(&values, ..)?;
    }
    {
        let mut lon = file.add_variable::<f32>("lon", &["lon"])?;
        let values: Vec<f32> = (0..12).map(|v| v as f32).collect();
        lon.put_values(&values, ..)?;
    }
    {
        let mut temp = file.add_variable::<f32>("temp", &["time", "lat", "lon"])?;
        temp.put_attribute("units", "K")?;
        temp.put_attribute("long_name", "Temperature")?;
        temp.put_attribute("valid_range", vec![-50.0f64, 50.0])?;
        let values: Vec<f32> = (0..5 * 10 * 12).map(|v| (v % 100) as f32 - 50.0).collect();
        temp.put_values(&values, (0usize..5, .., ..))?;
    }

    Ok(())
}

/// Write a file without global attributes whose only variable has a long
/// integer attribute.
pub fn write_long_attribute(path: &Path) -> Result<(), netcdf::Error> {
    let mut file = netcdf::create(path)?;
    file.add_dimension("level", 8)?;

    let mut level = file.add_variable::<i32>("level", &["level"])?;
    level.put_attribute("flag_values", vec![1i32, 2, 3, 4, 5, 6, 7, 8])?;
    level.put_attribute("flag_meanings", vec![10i32, 20, 30])?;

    Ok(())
}

/// Create `name` inside a fresh temporary directory using `write`.
pub fn in_tempdir(
    name: &str,
    write: fn(&Path) -> Result<(), netcdf::Error>,
) -> Result<(TempDir, PathBuf), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join(name);
    write(&path)?;
    Ok((dir, path))
}
