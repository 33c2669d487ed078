use serde::{Deserialize, Serialize};

/// A single satellite sample: one measured methane value at one location.
///
/// Observations are short-lived; they are parsed out of a data file and
/// consumed by the aggregation step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Observation {
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
}

impl Observation {
    pub fn new(latitude: f64, longitude: f64, value: f64) -> Self {
        Self {
            latitude,
            longitude,
            value,
        }
    }

    /// A sample is usable when its value is positive and its coordinates
    /// fall inside geographic bounds. Retrieval failures are encoded as
    /// zero, negative or non-finite values upstream.
    pub fn is_valid(&self) -> bool {
        self.value.is_finite()
            && self.value > 0.0
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sample_is_valid() {
        assert!(Observation::new(51.5, -0.1, 1820.0).is_valid());
    }

    #[test]
    fn test_non_positive_values_are_invalid() {
        assert!(!Observation::new(51.5, -0.1, 0.0).is_valid());
        assert!(!Observation::new(51.5, -0.1, -12.5).is_valid());
        assert!(!Observation::new(51.5, -0.1, f64::NAN).is_valid());
    }

    #[test]
    fn test_out_of_range_coordinates_are_invalid() {
        assert!(!Observation::new(91.0, 0.0, 1820.0).is_valid());
        assert!(!Observation::new(0.0, 181.0, 1820.0).is_valid());
        assert!(!Observation::new(-90.5, -180.5, 1820.0).is_valid());
    }
}
