use std::str::FromStr;

use crate::error::PlotError;

/// Available color schemes for the concentration scatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Black -> Purple -> Orange -> Light yellow
    #[default]
    Magma,
    /// Purple -> Blue -> Green -> Yellow
    Viridis,
}

/// Simplified 9-point interpolation based on magma control points
const MAGMA_POINTS: [(f64, f64, f64); 9] = [
    (0.001462, 0.000466, 0.013866), // Near black
    (0.081029, 0.054583, 0.215443), // Dark violet
    (0.232077, 0.059889, 0.437695), // Violet
    (0.390384, 0.100379, 0.501864), // Purple
    (0.550287, 0.161158, 0.505719), // Magenta
    (0.716387, 0.214982, 0.475290), // Pink-red
    (0.868793, 0.287728, 0.409303), // Red-orange
    (0.967671, 0.439703, 0.359810), // Orange
    (0.987053, 0.991438, 0.749504), // Light yellow
];

/// Simplified 5-point interpolation based on viridis control points
const VIRIDIS_POINTS: [(f64, f64, f64); 5] = [
    (0.267004, 0.004874, 0.329415), // Dark purple
    (0.282623, 0.140926, 0.457517), // Purple-blue
    (0.163625, 0.471133, 0.558148), // Blue-green
    (0.477504, 0.821444, 0.318195), // Yellow-green
    (0.993248, 0.906157, 0.143936), // Yellow
];

impl ColorScheme {
    /// Map a normalized value [0.0, 1.0] to an RGB color
    pub fn map(&self, value: f64) -> (u8, u8, u8) {
        let v = value.clamp(0.0, 1.0);

        match self {
            ColorScheme::Magma => interpolate(&MAGMA_POINTS, v),
            ColorScheme::Viridis => interpolate(&VIRIDIS_POINTS, v),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "magma" => Ok(ColorScheme::Magma),
            "viridis" => Ok(ColorScheme::Viridis),
            other => Err(PlotError::Config(format!(
                "unknown color scheme '{}' (expected magma or viridis)",
                other
            ))),
        }
    }
}

/// Normalize a measurement onto [0.0, 1.0] over a fixed scale, clipping
/// values beyond either bound
pub fn normalize(value: f64, scale_min: f64, scale_max: f64) -> f64 {
    ((value - scale_min) / (scale_max - scale_min)).clamp(0.0, 1.0)
}

fn interpolate(points: &[(f64, f64, f64)], v: f64) -> (u8, u8, u8) {
    let idx = v * (points.len() - 1) as f64;
    let i = idx.floor() as usize;
    let t = idx - i as f64;

    if i >= points.len() - 1 {
        let p = points[points.len() - 1];
        return ((p.0 * 255.0) as u8, (p.1 * 255.0) as u8, (p.2 * 255.0) as u8);
    }

    let (r0, g0, b0) = points[i];
    let (r1, g1, b1) = points[i + 1];

    let r = r0 + t * (r1 - r0);
    let g = g0 + t * (g1 - g0);
    let b = b0 + t * (b1 - b0);

    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magma_endpoints() {
        let (r, g, b) = ColorScheme::Magma.map(0.0);
        assert!(r < 5 && g < 5 && b < 10); // near black

        let (r, g, b) = ColorScheme::Magma.map(1.0);
        assert!(r > 240 && g > 240 && b > 180); // light yellow
    }

    #[test]
    fn test_map_clamps_out_of_range_input() {
        assert_eq!(ColorScheme::Magma.map(-0.5), ColorScheme::Magma.map(0.0));
        assert_eq!(ColorScheme::Magma.map(1.5), ColorScheme::Magma.map(1.0));
    }

    #[test]
    fn test_normalize_clips_to_scale() {
        assert_eq!(normalize(1750.0, 1750.0, 1950.0), 0.0);
        assert_eq!(normalize(1950.0, 1750.0, 1950.0), 1.0);
        assert_eq!(normalize(1700.0, 1750.0, 1950.0), 0.0);
        assert_eq!(normalize(2000.0, 1750.0, 1950.0), 1.0);
        assert!((normalize(1850.0, 1750.0, 1950.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_color_scheme() {
        assert_eq!("magma".parse::<ColorScheme>().unwrap(), ColorScheme::Magma);
        assert_eq!(
            "Viridis".parse::<ColorScheme>().unwrap(),
            ColorScheme::Viridis
        );
        assert!("jet".parse::<ColorScheme>().is_err());
    }
}
