use crate::models::{GridBin, Month, Observation};
use crate::utils::constants::VARIABLE;

/// Aggregation statistics for one month, printed by the `inspect` command.
#[derive(Debug, Clone)]
pub struct MonthSummary {
    pub month: Month,
    pub file_count: usize,
    pub observation_count: usize,
    pub bin_count: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub mean_value: f64,
}

impl MonthSummary {
    pub fn compute(
        month: Month,
        file_count: usize,
        observations: &[Observation],
        bins: &[GridBin],
    ) -> Self {
        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for observation in observations {
            min_value = min_value.min(observation.value);
            max_value = max_value.max(observation.value);
            sum += observation.value;
        }

        let (min_value, max_value, mean_value) = if observations.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (min_value, max_value, sum / observations.len() as f64)
        };

        Self {
            month,
            file_count,
            observation_count: observations.len(),
            bin_count: bins.len(),
            min_value,
            max_value,
            mean_value,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {} file(s), {} observation(s), {} bin(s), {} min/mean/max = {:.1}/{:.1}/{:.1} ppb",
            self.month.name(),
            self.month.code(),
            self.file_count,
            self.observation_count,
            self.bin_count,
            VARIABLE,
            self.min_value,
            self.mean_value,
            self.max_value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_statistics() {
        let observations = vec![
            Observation::new(10.0, 20.0, 1800.0),
            Observation::new(10.0, 20.0, 1900.0),
        ];
        let bins = vec![GridBin::new(10.0, 20.0, 1850.0, 2)];

        let summary = MonthSummary::compute(Month::March, 2, &observations, &bins);

        assert_eq!(summary.observation_count, 2);
        assert_eq!(summary.bin_count, 1);
        assert_eq!(summary.min_value, 1800.0);
        assert_eq!(summary.max_value, 1900.0);
        assert!((summary.mean_value - 1850.0).abs() < 1e-9);

        let text = summary.summary();
        assert!(text.contains("March"));
        assert!(text.contains("03"));
    }

    #[test]
    fn test_empty_month_summary_has_zeroed_statistics() {
        let summary = MonthSummary::compute(Month::May, 1, &[], &[]);

        assert_eq!(summary.observation_count, 0);
        assert_eq!(summary.min_value, 0.0);
        assert_eq!(summary.max_value, 0.0);
        assert_eq!(summary.mean_value, 0.0);
    }
}
