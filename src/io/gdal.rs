use gdal::{Dataset, errors::GdalError as GdalCrateError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors encountered when reading raster headers through GDAL
#[derive(Debug, Error)]
pub enum GdalError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalCrateError),
    #[error("raster has no spatial reference: {0:?}")]
    MissingProjection(PathBuf),
    #[error("raster has no geotransform: {0:?}")]
    MissingGeoTransform(PathBuf),
}

/// Bounding box of a raster in its native projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Bounds {
    /// Bounds of a `width` x `height` pixel grid under an affine
    /// geotransform ([origin_x, pixel_width, rot_x, origin_y, rot_y,
    /// pixel_height]).
    pub fn from_geo_transform(gt: &[f64; 6], width: usize, height: usize) -> Self {
        let (w, h) = (width as f64, height as f64);
        let x0 = gt[0];
        let y0 = gt[3];
        let x1 = gt[0] + gt[1] * w + gt[2] * h;
        let y1 = gt[3] + gt[4] * w + gt[5] * h;
        Bounds {
            left: x0.min(x1),
            bottom: y0.min(y1),
            right: x0.max(x1),
            top: y0.max(y1),
        }
    }
}

/// Spatial summary of one raster: its bounding box and its spatial
/// reference encoded as WKT.
#[derive(Debug, Clone)]
pub struct RasterGrid {
    pub bounds: Bounds,
    pub spatial_reference: String,
}

/// Read the grid summary from a raster header.
///
/// The dataset handle is scoped to this call and released on every path.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<RasterGrid, GdalError> {
    let path = path.as_ref();
    let dataset = Dataset::open(path)?;

    let gt = dataset
        .geo_transform()
        .map_err(|_| GdalError::MissingGeoTransform(path.to_path_buf()))?;
    let (width, height) = dataset.raster_size();
    let bounds = Bounds::from_geo_transform(&gt, width, height);

    let spatial_reference = dataset.projection();
    if spatial_reference.is_empty() {
        return Err(GdalError::MissingProjection(path.to_path_buf()));
    }

    Ok(RasterGrid {
        bounds,
        spatial_reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bounds_of_north_up_grid() {
        // 30 m pixels, origin at the upper-left corner
        let gt = [350985.0, 30.0, 0.0, 4423215.0, 0.0, -30.0];
        let bounds = Bounds::from_geo_transform(&gt, 100, 200);
        assert_abs_diff_eq!(bounds.left, 350985.0);
        assert_abs_diff_eq!(bounds.top, 4423215.0);
        assert_abs_diff_eq!(bounds.right, 350985.0 + 30.0 * 100.0);
        assert_abs_diff_eq!(bounds.bottom, 4423215.0 - 30.0 * 200.0);
    }

    #[test]
    fn bounds_normalize_south_up_grid() {
        let gt = [0.0, 10.0, 0.0, 0.0, 0.0, 10.0];
        let bounds = Bounds::from_geo_transform(&gt, 10, 10);
        assert_abs_diff_eq!(bounds.bottom, 0.0);
        assert_abs_diff_eq!(bounds.top, 100.0);
    }
}
