use serde::{Deserialize, Serialize};

/// One cell of the coarse lat/lon grid after aggregation.
///
/// Each (latitude, longitude) pair appears at most once per month;
/// `mean_value` is the arithmetic mean of every observation that rounded
/// into this cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridBin {
    pub latitude: f64,
    pub longitude: f64,
    pub mean_value: f64,
    pub sample_count: u32,
}

impl GridBin {
    pub fn new(latitude: f64, longitude: f64, mean_value: f64, sample_count: u32) -> Self {
        Self {
            latitude,
            longitude,
            mean_value,
            sample_count,
        }
    }
}
