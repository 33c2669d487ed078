use std::path::PathBuf;

use validator::Validate;

use crate::error::{PlotError, Result};
use crate::renderers::ColorScheme;
use crate::utils::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_BIN_RESOLUTION, DEFAULT_TITLE_YEAR, SCALE_MAX_PPB,
    SCALE_MIN_PPB,
};
use crate::utils::filename::generate_default_output_dir;

/// Run configuration for the map pipeline.
///
/// Defaults reproduce the standard figure set: magma colormap, white
/// backgrounds, sea bins plotted, colorbar and title included, one-degree
/// binning, fixed [1750, 1950] ppb scale on a 4096x2048 canvas.
#[derive(Debug, Clone, Validate)]
pub struct PlotConfig {
    pub color_scheme: ColorScheme,

    /// Color the sea blue and the land green instead of leaving both white
    pub colored_background: bool,

    /// Plot bins over the sea as well; when false only land bins survive
    pub plot_sea: bool,

    /// Include the colorbar and the per-month title
    pub decorations: bool,

    pub output_dir: PathBuf,

    #[validate(range(min = 0.05, max = 30.0))]
    pub bin_resolution: f64,

    pub scale_min: f64,
    pub scale_max: f64,

    #[validate(range(min = 64, max = 16384))]
    pub width: u32,

    #[validate(range(min = 64, max = 16384))]
    pub height: u32,

    pub title_year: i32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Magma,
            colored_background: false,
            plot_sea: true,
            decorations: true,
            output_dir: generate_default_output_dir(),
            bin_resolution: DEFAULT_BIN_RESOLUTION,
            scale_min: SCALE_MIN_PPB,
            scale_max: SCALE_MAX_PPB,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            title_year: DEFAULT_TITLE_YEAR,
        }
    }
}

impl PlotConfig {
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    pub fn with_colored_background(mut self, colored_background: bool) -> Self {
        self.colored_background = colored_background;
        self
    }

    pub fn with_plot_sea(mut self, plot_sea: bool) -> Self {
        self.plot_sea = plot_sea;
        self
    }

    pub fn with_decorations(mut self, decorations: bool) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_bin_resolution(mut self, bin_resolution: f64) -> Self {
        self.bin_resolution = bin_resolution;
        self
    }

    pub fn with_scale(mut self, scale_min: f64, scale_max: f64) -> Self {
        self.scale_min = scale_min;
        self.scale_max = scale_max;
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title_year(mut self, title_year: i32) -> Self {
        self.title_year = title_year;
        self
    }

    /// Validate field ranges and cross-field constraints before a run
    pub fn check(&self) -> Result<()> {
        self.validate()?;

        if self.scale_min >= self.scale_max {
            return Err(PlotError::Config(format!(
                "scale minimum {} must be below scale maximum {}",
                self.scale_min, self.scale_max
            )));
        }

        Ok(())
    }
}
