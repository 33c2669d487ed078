use crate::cli::args::{Cli, Commands};
use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::models::Month;
use crate::processors::{Aggregator, MonthSummary, MonthlyPipeline};
use crate::readers::MonthReader;
use crate::renderers::ColorScheme;
use crate::utils::filename::generate_default_output_dir;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            data_dir,
            boundaries,
            output_dir,
            month,
            land_only,
            colored_background,
            no_decorations,
            color_scheme,
            bin_resolution,
            scale_min,
            scale_max,
            title_year,
        } => {
            let color_scheme: ColorScheme = color_scheme.parse()?;

            let config = PlotConfig::default()
                .with_color_scheme(color_scheme)
                .with_plot_sea(!land_only)
                .with_colored_background(colored_background)
                .with_decorations(!no_decorations)
                .with_output_dir(output_dir.unwrap_or_else(generate_default_output_dir))
                .with_bin_resolution(bin_resolution)
                .with_scale(scale_min, scale_max)
                .with_title_year(title_year);
            config.check()?;

            let months = selected_months(month.as_deref())?;

            println!("Rendering {} month(s)", months.len());
            println!("Data directory: {}", data_dir.display());
            println!("Boundaries: {}", boundaries.display());
            println!("Output directory: {}", config.output_dir.display());

            let progress =
                ProgressReporter::new(months.len() as u64, "Rendering monthly maps...", false);

            let pipeline = MonthlyPipeline::new(config, data_dir, boundaries);
            let written = pipeline.run(&months, Some(&progress))?;

            progress.finish_with_message(&format!("Wrote {} image(s)", written.len()));

            for path in &written {
                println!("  {}", path.display());
            }
            println!("Rendering complete!");
        }

        Commands::Inspect {
            data_dir,
            month,
            bin_resolution,
        } => {
            let months = selected_months(month.as_deref())?;

            println!("Inspecting {} month(s)", months.len());
            println!("Data directory: {}", data_dir.display());
            println!();

            let reader = MonthReader::new();
            let aggregator = Aggregator::new(bin_resolution);

            for month in months {
                let month_dir = data_dir.join(month.code());

                let files = reader.data_files(&month_dir)?;
                let observations = reader.read_month(&month_dir)?;
                let bins = aggregator.aggregate(&observations);

                let summary = MonthSummary::compute(month, files.len(), &observations, &bins);
                println!("{}", summary.summary());
            }
        }
    }

    Ok(())
}

fn selected_months(code: Option<&str>) -> Result<Vec<Month>> {
    match code {
        Some(code) => Month::from_code(code).map(|m| vec![m]).ok_or_else(|| {
            PlotError::Config(format!("unknown month folder code: '{}'", code))
        }),
        None => Ok(Month::ALL.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_months_defaults_to_all() {
        let months = selected_months(None).unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], Month::January);
    }

    #[test]
    fn test_selected_months_single_code() {
        let months = selected_months(Some("07")).unwrap();
        assert_eq!(months, vec![Month::July]);
    }

    #[test]
    fn test_selected_months_rejects_unknown_code() {
        assert!(selected_months(Some("00")).is_err());
        assert!(selected_months(Some("july")).is_err());
    }
}
