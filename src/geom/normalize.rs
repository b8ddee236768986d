//! Rendering preparation for county polygons: repair, orient, flatten.

use anyhow::{bail, Result};
use geo::{orient::{Direction, Orient}, BooleanOps, Geometry, MultiPolygon};
use tracing::{debug, warn};

use super::{is_valid, signed_area};

/// One closed ring of `[x, y]` pairs, first point repeated at the end.
pub type Ring = Vec<[f64; 2]>;

/// Turn a Polygon or MultiPolygon into render-ready exterior rings.
///
/// 1. invalid geometry is repaired by a self-union (the zero-width buffer trick);
/// 2. every part is oriented with a counter-clockwise shell;
/// 3. each part's shell is flattened to plain coordinates.
///
/// Repair can change topology (a bow-tie becomes two triangles). If the result is
/// still invalid it is passed through with a warning. Rings with fewer than four
/// points or zero area cannot be filled and are dropped.
pub fn normalize(geometry: &Geometry<f64>) -> Result<Vec<Ring>> {
    let shape = match geometry {
        Geometry::Polygon(polygon) => MultiPolygon::new(vec![polygon.clone()]),
        Geometry::MultiPolygon(mp) => mp.clone(),
        other => bail!("[geom::normalize] expected Polygon or MultiPolygon, got {}", geometry_kind(other)),
    };

    let oriented = repair(shape).orient(Direction::Default);

    Ok(oriented.0.iter()
        .map(|polygon| polygon.exterior().coords().map(|c| [c.x, c.y]).collect::<Ring>())
        .filter(|ring| ring.len() >= 4 && signed_area(ring) != 0.0)
        .collect())
}

/// Return `shape` untouched when valid, otherwise its self-union.
pub(crate) fn repair(shape: MultiPolygon<f64>) -> MultiPolygon<f64> {
    if is_valid(&shape) {
        return shape;
    }

    debug!("[geom::normalize] repairing invalid geometry with {} part(s)", shape.0.len());
    let repaired = shape.union(&MultiPolygon::<f64>::new(vec![]));
    if !is_valid(&repaired) {
        warn!("[geom::normalize] geometry still invalid after repair; passing it through");
    }
    repaired
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
