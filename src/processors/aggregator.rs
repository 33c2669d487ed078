use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{GridBin, Observation};
use crate::utils::constants::DEFAULT_BIN_RESOLUTION;

/// Bins observations onto a coarse lat/lon grid and averages each cell.
///
/// The binning is a deliberate lossy simplification: coordinates are
/// rounded to the nearest multiple of the resolution so that one scatter
/// marker per cell stays tractable to render.
pub struct Aggregator {
    bin_resolution: f64,
}

impl Aggregator {
    pub fn new(bin_resolution: f64) -> Self {
        Self { bin_resolution }
    }

    fn bin_index(&self, coordinate: f64) -> i64 {
        (coordinate / self.bin_resolution).round() as i64
    }

    fn bin_coordinate(&self, index: i64) -> f64 {
        index as f64 * self.bin_resolution
    }

    /// Group observations by rounded (lat, lon) and compute per-cell means.
    ///
    /// Bins are returned sorted by (latitude, longitude) so output is
    /// deterministic across runs.
    pub fn aggregate(&self, observations: &[Observation]) -> Vec<GridBin> {
        let mut cells: BTreeMap<(i64, i64), (f64, u32)> = BTreeMap::new();

        for observation in observations {
            let key = (
                self.bin_index(observation.latitude),
                self.bin_index(observation.longitude),
            );
            let cell = cells.entry(key).or_insert((0.0, 0));
            cell.0 += observation.value;
            cell.1 += 1;
        }

        let bins: Vec<GridBin> = cells
            .into_iter()
            .map(|((lat_idx, lon_idx), (sum, count))| {
                GridBin::new(
                    self.bin_coordinate(lat_idx),
                    self.bin_coordinate(lon_idx),
                    sum / f64::from(count),
                    count,
                )
            })
            .collect();

        debug!(
            observations = observations.len(),
            bins = bins.len(),
            resolution = self.bin_resolution,
            "aggregated month"
        );

        bins
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_BIN_RESOLUTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_sample_lands_in_exactly_one_bin() {
        let observations = vec![
            Observation::new(10.2, 20.4, 1800.0),
            Observation::new(-45.6, 170.9, 1850.0),
            Observation::new(0.1, -0.3, 1900.0),
        ];

        let bins = Aggregator::default().aggregate(&observations);

        assert_eq!(bins.len(), 3);
        let total: u32 = bins.iter().map(|b| b.sample_count).sum();
        assert_eq!(total as usize, observations.len());
    }

    #[test]
    fn test_mean_of_multiple_contributors() {
        // All four samples round into the (10, 20) cell
        let observations = vec![
            Observation::new(10.2, 20.4, 1800.0),
            Observation::new(9.8, 19.6, 1820.0),
            Observation::new(10.4, 20.1, 1840.0),
            Observation::new(10.0, 20.0, 1860.0),
        ];

        let bins = Aggregator::default().aggregate(&observations);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].latitude, 10.0);
        assert_eq!(bins[0].longitude, 20.0);
        assert_eq!(bins[0].sample_count, 4);
        assert!((bins[0].mean_value - 1830.0).abs() < 1e-9);
    }

    #[test]
    fn test_bins_are_sorted_for_determinism() {
        let observations = vec![
            Observation::new(50.0, 10.0, 1800.0),
            Observation::new(-10.0, 5.0, 1800.0),
            Observation::new(-10.0, -120.0, 1800.0),
        ];

        let bins = Aggregator::default().aggregate(&observations);

        let keys: Vec<(f64, f64)> = bins.iter().map(|b| (b.latitude, b.longitude)).collect();
        assert_eq!(keys, vec![(-10.0, -120.0), (-10.0, 5.0), (50.0, 10.0)]);
    }

    #[test]
    fn test_configurable_resolution() {
        let observations = vec![
            Observation::new(10.1, 20.1, 1800.0),
            Observation::new(10.4, 20.4, 1900.0),
        ];

        // At half-degree resolution the two samples fall in different cells
        let bins = Aggregator::new(0.5).aggregate(&observations);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].latitude, 10.0);
        assert_eq!(bins[1].latitude, 10.5);

        // At one-degree resolution they merge
        let bins = Aggregator::new(1.0).aggregate(&observations);
        assert_eq!(bins.len(), 1);
    }

    #[test]
    fn test_no_observations_produce_no_bins() {
        let bins = Aggregator::default().aggregate(&[]);
        assert!(bins.is_empty());
    }
}
