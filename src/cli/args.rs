use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{
    DEFAULT_BIN_RESOLUTION, DEFAULT_TITLE_YEAR, SCALE_MAX_PPB, SCALE_MIN_PPB,
};

#[derive(Parser)]
#[command(name = "tropomi-mapper")]
#[command(about = "Monthly averaged global methane maps from TROPOMI satellite data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one map image per month of data
    Render {
        #[arg(short, long, help = "Directory containing per-month data folders (01..12)")]
        data_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Country boundary shapefile used for the land mask and basemap"
        )]
        boundaries: PathBuf,

        #[arg(short, long, help = "Output directory [default: figures-{YYMMDD}]")]
        output_dir: Option<PathBuf>,

        #[arg(short, long, help = "Render a single month (two-digit folder code)")]
        month: Option<String>,

        #[arg(long, default_value = "false", help = "Plot only bins that fall on land")]
        land_only: bool,

        #[arg(
            long,
            default_value = "false",
            help = "Color the sea blue and the land green"
        )]
        colored_background: bool,

        #[arg(long, default_value = "false", help = "Omit the colorbar and title")]
        no_decorations: bool,

        #[arg(long, default_value = "magma", help = "Color scheme (magma, viridis)")]
        color_scheme: String,

        #[arg(
            long,
            default_value_t = DEFAULT_BIN_RESOLUTION,
            help = "Grid bin resolution in degrees"
        )]
        bin_resolution: f64,

        #[arg(long, default_value_t = SCALE_MIN_PPB, help = "Color scale minimum (ppb)")]
        scale_min: f64,

        #[arg(long, default_value_t = SCALE_MAX_PPB, help = "Color scale maximum (ppb)")]
        scale_max: f64,

        #[arg(long, default_value_t = DEFAULT_TITLE_YEAR, help = "Year printed in plot titles")]
        title_year: i32,
    },

    /// Summarize per-month aggregation without rendering
    Inspect {
        #[arg(short, long, help = "Directory containing per-month data folders (01..12)")]
        data_dir: PathBuf,

        #[arg(short, long, help = "Inspect a single month (two-digit folder code)")]
        month: Option<String>,

        #[arg(
            long,
            default_value_t = DEFAULT_BIN_RESOLUTION,
            help = "Grid bin resolution in degrees"
        )]
        bin_resolution: f64,
    },
}
