use std::path::Path;

use tracing::debug;

use crate::error::{PlotError, Result};
use crate::models::Observation;
use crate::utils::constants::{LATITUDE_COLUMN, LONGITUDE_COLUMN, VARIABLE};

/// Reads observations out of a single data file.
///
/// Data files are CSV with a header row; columns are located by name so
/// their order does not matter. Rows with a missing or unparseable cell
/// are treated as missing samples, as are rows failing the validity
/// filter (non-positive values, out-of-range coordinates).
pub struct ObservationReader;

impl ObservationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read all usable observations from one data file
    pub fn read_observations(&self, path: &Path) -> Result<Vec<Observation>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let lat_idx = column_index(&headers, LATITUDE_COLUMN, path)?;
        let lon_idx = column_index(&headers, LONGITUDE_COLUMN, path)?;
        let value_idx = column_index(&headers, VARIABLE, path)?;

        let mut observations = Vec::new();
        let mut skipped = 0usize;

        for record in reader.records() {
            let record = record?;

            let (Some(latitude), Some(longitude), Some(value)) = (
                parse_cell(record.get(lat_idx)),
                parse_cell(record.get(lon_idx)),
                parse_cell(record.get(value_idx)),
            ) else {
                skipped += 1;
                continue;
            };

            let observation = Observation::new(latitude, longitude, value);
            if observation.is_valid() {
                observations.push(observation);
            } else {
                skipped += 1;
            }
        }

        debug!(
            file = %path.display(),
            kept = observations.len(),
            skipped,
            "read data file"
        );

        Ok(observations)
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        PlotError::MissingData(format!(
            "column '{}' not found in {}",
            name,
            path.display()
        ))
    })
}

fn parse_cell(cell: Option<&str>) -> Option<f64> {
    cell.filter(|s| !s.is_empty()).and_then(|s| s.parse().ok())
}
