use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PlotError, Result};
use crate::models::Observation;
use crate::readers::ObservationReader;
use crate::utils::constants::DATA_EXTENSION;

/// Loads every data file belonging to one month directory.
pub struct MonthReader;

impl MonthReader {
    pub fn new() -> Self {
        Self
    }

    /// Enumerate the month's data files in lexicographic order.
    ///
    /// A month directory without any data files is an error: an empty map
    /// would silently hide a data layout problem.
    pub fn data_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(DATA_EXTENSION) {
                files.push(path);
            }
        }

        files.sort();

        if files.is_empty() {
            return Err(PlotError::EmptyMonth(dir.to_path_buf()));
        }

        Ok(files)
    }

    /// Read and concatenate all observations for the month
    pub fn read_month(&self, dir: &Path) -> Result<Vec<Observation>> {
        let files = self.data_files(dir)?;

        info!(
            directory = %dir.display(),
            files = files.len(),
            "reading month data"
        );

        let reader = ObservationReader::new();
        let mut observations = Vec::new();
        for file in &files {
            observations.extend(reader.read_observations(file)?);
        }

        Ok(observations)
    }
}

impl Default for MonthReader {
    fn default() -> Self {
        Self::new()
    }
}
