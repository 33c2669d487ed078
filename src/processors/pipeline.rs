use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::models::Month;
use crate::processors::{Aggregator, LandMask};
use crate::readers::MonthReader;
use crate::renderers::MapRenderer;
use crate::utils::filename::output_filename;
use crate::utils::progress::ProgressReporter;

/// Sequential month-by-month pipeline: load, aggregate, mask, render.
///
/// Months are processed one after another with no shared state between
/// passes beyond the (idempotent) output directory creation. The first
/// failing month aborts the whole run.
pub struct MonthlyPipeline {
    config: PlotConfig,
    data_dir: PathBuf,
    boundaries: PathBuf,
}

impl MonthlyPipeline {
    pub fn new(config: PlotConfig, data_dir: PathBuf, boundaries: PathBuf) -> Self {
        Self {
            config,
            data_dir,
            boundaries,
        }
    }

    /// Render the given months, returning the written image paths
    pub fn run(
        &self,
        months: &[Month],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.config.output_dir)?;

        let mut written = Vec::with_capacity(months.len());
        for (index, month) in months.iter().enumerate() {
            if let Some(p) = progress {
                p.set_message(&format!("Rendering {}...", month.name()));
            }

            written.push(self.process_month(*month)?);

            if let Some(p) = progress {
                p.update(index as u64 + 1);
            }
        }

        Ok(written)
    }

    /// One full pass for one month: load, aggregate, mask, render, save
    pub fn process_month(&self, month: Month) -> Result<PathBuf> {
        let month_dir = self.data_dir.join(month.code());

        let reader = MonthReader::new();
        let observations = reader.read_month(&month_dir)?;

        let aggregator = Aggregator::new(self.config.bin_resolution);
        let bins = aggregator.aggregate(&observations);

        // Boundaries are reloaded every month rather than cached; they are
        // needed for the basemap even when the sea is plotted.
        let mask = LandMask::from_shapefile(&self.boundaries)?;

        let plotted = if self.config.plot_sea {
            bins
        } else {
            mask.filter_bins(bins)
        };

        let output = self.config.output_dir.join(output_filename(month));
        let renderer = MapRenderer::new(&self.config);
        renderer.render(month, &plotted, &mask, &output)?;

        info!(
            month = month.name(),
            bins = plotted.len(),
            output = %output.display(),
            "rendered month"
        );

        Ok(output)
    }
}
