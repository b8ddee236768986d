//! Well-Known Binary decoding for polygon geometry columns.

mod read;
#[cfg(test)]
mod write;

pub(crate) use read::*;
#[cfg(test)]
pub(crate) use write::*;

/// WKB geometry type for Polygon
const WKB_POLYGON: u32 = 3;
/// WKB geometry type for MultiPolygon
const WKB_MULTIPOLYGON: u32 = 6;
/// WKB byte order: big endian
const WKB_BE: u8 = 0;
/// WKB byte order: little endian
const WKB_LE: u8 = 1;
