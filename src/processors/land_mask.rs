use std::path::Path;

use geo::{Contains, MultiPolygon, Point};
use shapefile::Shape;
use tracing::{debug, info, warn};

use crate::error::{PlotError, Result};
use crate::models::GridBin;

/// Country boundary polygons used for the land/sea membership test and
/// as the basemap geometry (land fill and border outlines).
///
/// The polygon set is read-only after loading; the containment test is a
/// plain point-in-any-polygon scan without a spatial index.
pub struct LandMask {
    polygons: Vec<MultiPolygon<f64>>,
}

impl LandMask {
    /// Load every polygon shape from a country-boundary shapefile
    pub fn from_shapefile(path: &Path) -> Result<Self> {
        let shapes = shapefile::read_shapes(path)?;

        let mut polygons = Vec::with_capacity(shapes.len());
        for shape in shapes {
            match shape {
                Shape::Polygon(polygon) => {
                    polygons.push(MultiPolygon::<f64>::from(polygon));
                }
                other => {
                    warn!(shape_type = %other.shapetype(), "skipping non-polygon shape");
                }
            }
        }

        if polygons.is_empty() {
            return Err(PlotError::MissingData(format!(
                "no polygon shapes found in {}",
                path.display()
            )));
        }

        info!(
            file = %path.display(),
            polygons = polygons.len(),
            "loaded land boundaries"
        );

        Ok(Self { polygons })
    }

    pub fn from_polygons(polygons: Vec<MultiPolygon<f64>>) -> Self {
        Self { polygons }
    }

    /// Whether the given point lies within any land polygon
    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        let point = Point::new(longitude, latitude);
        self.polygons.iter().any(|mp| mp.contains(&point))
    }

    /// Keep only the bins whose center point falls on land
    pub fn filter_bins(&self, bins: Vec<GridBin>) -> Vec<GridBin> {
        let before = bins.len();
        let kept: Vec<GridBin> = bins
            .into_iter()
            .filter(|bin| self.contains(bin.longitude, bin.latitude))
            .collect();

        debug!(before, after = kept.len(), "applied land mask");

        kept
    }

    pub fn polygons(&self) -> &[MultiPolygon<f64>] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square_mask() -> LandMask {
        // A 20x20 degree square centered on the origin
        let square = polygon![
            (x: -10.0, y: -10.0),
            (x: 10.0, y: -10.0),
            (x: 10.0, y: 10.0),
            (x: -10.0, y: 10.0),
        ];
        LandMask::from_polygons(vec![MultiPolygon::from(square)])
    }

    #[test]
    fn test_contains_inside_and_outside() {
        let mask = square_mask();

        assert!(mask.contains(0.0, 0.0));
        assert!(mask.contains(-9.0, 9.0));
        assert!(!mask.contains(11.0, 0.0));
        assert!(!mask.contains(0.0, -11.0));
        assert!(!mask.contains(120.0, 40.0));
    }

    #[test]
    fn test_filter_bins_drops_offshore_points() {
        let mask = square_mask();
        let bins = vec![
            GridBin::new(5.0, 5.0, 1800.0, 3),
            GridBin::new(0.0, 0.0, 1850.0, 1),
            GridBin::new(40.0, 120.0, 1900.0, 2), // off-shore
        ];

        let kept = mask.filter_bins(bins);

        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|b| mask.contains(b.longitude, b.latitude)));
    }

    #[test]
    fn test_missing_shapefile_is_an_error() {
        let result = LandMask::from_shapefile(Path::new("does/not/exist.shp"));
        assert!(result.is_err());
    }
}
