use gdal::spatial_ref::{AxisMappingStrategy, CoordTransform, SpatialRef};
use serde::{Deserialize, Serialize};

use crate::io::gdal::{GdalError, RasterGrid};
use crate::types::{CornerSet, LonLat, XyPoint};

/// Native spatial reference of a scene plus its four corner points, as
/// emitted under `grid_spatial.projection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub spatial_reference: String,
    pub geo_ref_points: CornerSet<XyPoint>,
}

impl From<&RasterGrid> for Projection {
    fn from(grid: &RasterGrid) -> Self {
        let b = grid.bounds;
        Projection {
            spatial_reference: grid.spatial_reference.clone(),
            geo_ref_points: CornerSet {
                ul: XyPoint { x: b.left, y: b.top },
                ur: XyPoint { x: b.right, y: b.top },
                ll: XyPoint { x: b.left, y: b.bottom },
                lr: XyPoint { x: b.right, y: b.bottom },
            },
        }
    }
}

impl Projection {
    /// Reproject the four corner points into the geographic counterpart of
    /// the native spatial reference (same datum).
    ///
    /// The native corners are left untouched; each named corner maps to the
    /// geographic pair of the same name. Axis order is forced to the
    /// traditional GIS convention so x is longitude and y is latitude.
    pub fn geographic_corners(&self) -> Result<CornerSet<LonLat>, GdalError> {
        let native = SpatialRef::from_wkt(&self.spatial_reference)?;
        let mut geographic = native.geog_cs()?;
        geographic.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);

        let transform = CoordTransform::new(&native, &geographic)?;
        let p = &self.geo_ref_points;
        let mut xs = [p.ul.x, p.ur.x, p.ll.x, p.lr.x];
        let mut ys = [p.ul.y, p.ur.y, p.ll.y, p.lr.y];
        let mut zs = [0.0; 4];
        transform.transform_coords(&mut xs, &mut ys, &mut zs)?;

        Ok(CornerSet {
            ul: LonLat { lon: xs[0], lat: ys[0] },
            ur: LonLat { lon: xs[1], lat: ys[1] },
            ll: LonLat { lon: xs[2], lat: ys[2] },
            lr: LonLat { lon: xs[3], lat: ys[3] },
        })
    }
}
