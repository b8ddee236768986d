//! WKB writing operations (little endian, 2D). Used to build fixtures.

use geo::{Geometry, LineString, Polygon};

use super::{WKB_LE, WKB_MULTIPOLYGON, WKB_POLYGON};

fn write_ring(out: &mut Vec<u8>, ring: &LineString<f64>) {
    out.extend_from_slice(&(ring.0.len() as u32).to_le_bytes());
    for coord in ring.coords() {
        out.extend_from_slice(&coord.x.to_le_bytes());
        out.extend_from_slice(&coord.y.to_le_bytes());
    }
}

fn write_polygon(out: &mut Vec<u8>, polygon: &Polygon<f64>) {
    out.push(WKB_LE);
    out.extend_from_slice(&WKB_POLYGON.to_le_bytes());
    out.extend_from_slice(&((1 + polygon.interiors().len()) as u32).to_le_bytes());
    write_ring(out, polygon.exterior());
    for interior in polygon.interiors() {
        write_ring(out, interior);
    }
}

/// Encode a Polygon or MultiPolygon as WKB.
///
/// Panics on any other geometry type.
pub(crate) fn write_wkb_geometry(geometry: &Geometry<f64>) -> Vec<u8> {
    let mut out = Vec::new();
    match geometry {
        Geometry::Polygon(polygon) => write_polygon(&mut out, polygon),
        Geometry::MultiPolygon(mp) => {
            out.push(WKB_LE);
            out.extend_from_slice(&WKB_MULTIPOLYGON.to_le_bytes());
            out.extend_from_slice(&(mp.0.len() as u32).to_le_bytes());
            for polygon in &mp.0 {
                write_polygon(&mut out, polygon);
            }
        }
        other => panic!("[io::wkb::write] unsupported geometry: {other:?}"),
    }
    out
}
