use geo::{
    line_intersection::{line_intersection, LineIntersection},
    BoundingRect, Line, LineString, MultiPolygon, Polygon, Relate,
};
use rstar::RTree;

use super::{signed_area, BoundingBox};

/// True when every ring of every polygon is closed, has at least four finite
/// coordinates, encloses a non-zero area and does not cross or touch itself,
/// and no two parts share interior area.
///
/// Hole placement relative to the shell is not checked; holes are never drawn.
pub fn is_valid(shape: &MultiPolygon<f64>) -> bool {
    shape.0.iter().all(polygon_is_valid) && parts_are_disjoint(shape)
}

/// Pairwise overlap test between parts, pruned with an R-tree over part bounds.
/// Parts that only touch along their boundaries are accepted.
fn parts_are_disjoint(shape: &MultiPolygon<f64>) -> bool {
    if shape.0.len() < 2 {
        return true;
    }

    let rects: Vec<_> = shape.0.iter().map(|p| p.bounding_rect()).collect();
    let rtree = RTree::bulk_load(
        rects.iter().enumerate()
            .filter_map(|(i, rect)| rect.map(|rect| BoundingBox::new(i, rect)))
            .collect()
    );

    for (i, rect) in rects.iter().enumerate() {
        let Some(rect) = rect else { continue };
        for candidate in rtree.locate_in_envelope_intersecting(&BoundingBox::envelope_of(rect)) {
            let j = candidate.idx();
            if j <= i { continue }

            let im = shape.0[i].relate(&shape.0[j]);
            if im.is_intersects() && !im.is_touches() {
                return false;
            }
        }
    }

    true
}

pub(crate) fn polygon_is_valid(polygon: &Polygon<f64>) -> bool {
    ring_is_valid(polygon.exterior()) && polygon.interiors().iter().all(ring_is_valid)
}

pub(crate) fn ring_is_valid(ring: &LineString<f64>) -> bool {
    let coords = &ring.0;
    if coords.len() < 4 || coords.first() != coords.last() {
        return false;
    }
    if coords.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return false;
    }
    if signed_area(coords) == 0.0 {
        return false;
    }
    ring_is_simple(ring)
}

/// Segment-pair intersection test, pruned with an R-tree over segment bounds.
fn ring_is_simple(ring: &LineString<f64>) -> bool {
    // repeated vertices are tolerated, so zero-length segments are skipped
    let lines: Vec<Line<f64>> = ring.lines().filter(|l| l.start != l.end).collect();
    let n = lines.len();
    if n < 3 {
        return false;
    }

    let rtree = RTree::bulk_load(
        lines.iter().enumerate()
            .map(|(i, line)| BoundingBox::new(i, line.bounding_rect()))
            .collect()
    );

    for (i, line) in lines.iter().enumerate() {
        let envelope = BoundingBox::envelope_of(&line.bounding_rect());
        for candidate in rtree.locate_in_envelope_intersecting(&envelope) {
            let j = candidate.idx();
            if j <= i { continue }

            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match line_intersection(*line, lines[j]) {
                None => {}
                Some(LineIntersection::SinglePoint { is_proper, .. }) => {
                    if is_proper || !adjacent { return false }
                }
                Some(LineIntersection::Collinear { .. }) => return false,
            }
        }
    }

    true
}
