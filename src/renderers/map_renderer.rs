use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use tracing::debug;

use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::models::{GridBin, Month};
use crate::processors::LandMask;
use crate::renderers::colormap::normalize;
use crate::utils::constants::{
    BACKGROUND_PLAIN, BORDER_COLOR, BORDER_STROKE_WIDTH, LAND_COLORED, MARKER_RADIUS, SEA_COLORED,
    VARIABLE,
};

/// Draws one global equirectangular map per month and writes it as PNG.
///
/// Layer order: sea background, land fill, concentration scatter, border
/// outlines, then optional decorations (title band on top, vertical
/// colorbar on the right).
pub struct MapRenderer<'a> {
    config: &'a PlotConfig,
}

impl<'a> MapRenderer<'a> {
    pub fn new(config: &'a PlotConfig) -> Self {
        Self { config }
    }

    /// Render the month's bins over the basemap and save to `output`
    pub fn render(
        &self,
        month: Month,
        bins: &[GridBin],
        land: &LandMask,
        output: &Path,
    ) -> Result<()> {
        let (width, height) = (self.config.width, self.config.height);

        let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
        root.fill(&rgb(BACKGROUND_PLAIN)).map_err(render_error)?;

        // Carve off the title band and the colorbar strip when decorations
        // are enabled; otherwise the map fills the whole canvas.
        let (map_area, title_area, bar_area) = if self.config.decorations {
            let title_height = (height / 10).max(40) as i32;
            let bar_width = (width / 14).max(60);

            let (title, rest) = root.clone().split_vertically(title_height);
            let (map, bar) = rest.split_horizontally((width - bar_width) as i32);
            (map, Some(title), Some(bar))
        } else {
            (root.clone(), None, None)
        };

        self.draw_map(&map_area, bins, land)?;

        if let Some(area) = title_area {
            self.draw_title(&area, month)?;
        }
        if let Some(area) = bar_area {
            self.draw_colorbar(&area)?;
        }

        root.present().map_err(render_error)?;

        debug!(output = %output.display(), bins = bins.len(), "wrote map image");

        Ok(())
    }

    fn draw_map(
        &self,
        area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
        bins: &[GridBin],
        land: &LandMask,
    ) -> Result<()> {
        let (map_width, map_height) = area.dim_in_pixel();

        let (sea_color, land_color) = if self.config.colored_background {
            (rgb(SEA_COLORED), rgb(LAND_COLORED))
        } else {
            (rgb(BACKGROUND_PLAIN), rgb(BACKGROUND_PLAIN))
        };
        let border_color = rgb(BORDER_COLOR);

        area.fill(&sea_color).map_err(render_error)?;

        // Land fill; polygon holes are painted back in the sea color
        for multi_polygon in land.polygons() {
            for polygon in multi_polygon.iter() {
                let exterior = project_ring(polygon.exterior(), map_width, map_height);
                area.draw(&Polygon::new(exterior, land_color.filled()))
                    .map_err(render_error)?;

                for interior in polygon.interiors() {
                    let ring = project_ring(interior, map_width, map_height);
                    area.draw(&Polygon::new(ring, sea_color.filled()))
                        .map_err(render_error)?;
                }
            }
        }

        // Concentration scatter, one marker per grid bin
        for bin in bins {
            let level = normalize(bin.mean_value, self.config.scale_min, self.config.scale_max);
            let (r, g, b) = self.config.color_scheme.map(level);
            let center = to_pixel(bin.longitude, bin.latitude, map_width, map_height);

            area.draw(&Circle::new(
                center,
                MARKER_RADIUS,
                RGBColor(r, g, b).filled(),
            ))
            .map_err(render_error)?;
        }

        // Coastlines and country borders over the scatter
        for multi_polygon in land.polygons() {
            for polygon in multi_polygon.iter() {
                let exterior = project_ring(polygon.exterior(), map_width, map_height);
                area.draw(&PathElement::new(
                    exterior,
                    border_color.stroke_width(BORDER_STROKE_WIDTH),
                ))
                .map_err(render_error)?;

                for interior in polygon.interiors() {
                    let ring = project_ring(interior, map_width, map_height);
                    area.draw(&PathElement::new(
                        ring,
                        border_color.stroke_width(BORDER_STROKE_WIDTH),
                    ))
                    .map_err(render_error)?;
                }
            }
        }

        Ok(())
    }

    fn draw_title(
        &self,
        area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
        month: Month,
    ) -> Result<()> {
        let (title_width, title_height) = area.dim_in_pixel();

        let label = format!(
            "{} {} TROPOMI CH₄ (averaged on a {}° grid)",
            month.name(),
            self.config.title_year,
            self.config.bin_resolution
        );

        let font_size = (title_height as f64 * 0.35).max(16.0);
        let style = sans_serif(font_size)
            .color(&rgb(BORDER_COLOR))
            .pos(Pos::new(HPos::Center, VPos::Center));

        area.draw(&Text::new(
            label,
            (title_width as i32 / 2, title_height as i32 / 2),
            style,
        ))
        .map_err(render_error)?;

        Ok(())
    }

    fn draw_colorbar(
        &self,
        area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    ) -> Result<()> {
        let (bar_width, bar_height) = area.dim_in_pixel();
        let black = rgb(BORDER_COLOR);

        // Bar geometry: a vertical strip with breathing room for labels
        let y0 = (bar_height / 10) as i32;
        let y1 = (bar_height - bar_height / 10) as i32;
        let x0 = (bar_width / 8) as i32;
        let x1 = x0 + (bar_width / 4) as i32;

        // Gradient, highest value at the top
        for y in y0..y1 {
            let t = 1.0 - f64::from(y - y0) / f64::from((y1 - y0 - 1).max(1));
            let (r, g, b) = self.config.color_scheme.map(t);
            area.draw(&Rectangle::new(
                [(x0, y), (x1, y + 1)],
                RGBColor(r, g, b).filled(),
            ))
            .map_err(render_error)?;
        }

        area.draw(&Rectangle::new(
            [(x0, y0), (x1, y1)],
            black.stroke_width(1),
        ))
        .map_err(render_error)?;

        // Tick labels at five evenly spaced scale values
        let tick_font = (bar_width as f64 * 0.11).max(12.0);
        let tick_style = sans_serif(tick_font)
            .color(&black)
            .pos(Pos::new(HPos::Left, VPos::Center));

        let ticks = 5;
        for i in 0..ticks {
            let t = f64::from(i) / f64::from(ticks - 1);
            let value = self.config.scale_max - t * (self.config.scale_max - self.config.scale_min);
            let y = y0 + ((f64::from(y1 - y0)) * t) as i32;

            area.draw(&Text::new(
                format!("{:.0}", value),
                (x1 + 8, y),
                tick_style.clone(),
            ))
            .map_err(render_error)?;
        }

        // Vertical caption along the right edge
        let caption = format!("Methane Concentration ({} ppb)", VARIABLE);
        let caption_font = (bar_width as f64 * 0.13).max(14.0);
        let caption_style = sans_serif(caption_font)
            .transform(FontTransform::Rotate270)
            .color(&black)
            .pos(Pos::new(HPos::Center, VPos::Center));

        area.draw(&Text::new(
            caption,
            (bar_width as i32 - (bar_width as i32 / 8), bar_height as i32 / 2),
            caption_style,
        ))
        .map_err(render_error)?;

        Ok(())
    }
}

/// Equirectangular projection of one geographic point onto pixel space
fn to_pixel(longitude: f64, latitude: f64, width: u32, height: u32) -> (i32, i32) {
    let x = (longitude + 180.0) / 360.0 * f64::from(width.saturating_sub(1));
    let y = (90.0 - latitude) / 180.0 * f64::from(height.saturating_sub(1));
    (x.round() as i32, y.round() as i32)
}

fn project_ring(ring: &geo::LineString<f64>, width: u32, height: u32) -> Vec<(i32, i32)> {
    ring.coords()
        .map(|c| to_pixel(c.x, c.y, width, height))
        .collect()
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

fn sans_serif<'a>(size: f64) -> FontDesc<'a> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

fn render_error<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}
