//! WKB reading operations.

use std::io::{Cursor, Read};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, Geometry, LineString, MultiPolygon, Polygon};

use super::{WKB_BE, WKB_LE, WKB_MULTIPOLYGON, WKB_POLYGON};

/// EWKB flag announcing an embedded SRID after the type word.
const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// Little cursor over WKB bytes that remembers the current byte order.
struct WkbCursor<'a> {
    inner: Cursor<&'a [u8]>,
    little_endian: bool,
}

impl<'a> WkbCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { inner: Cursor::new(bytes), little_endian: true }
    }

    fn read_byte_order(&mut self) -> Result<()> {
        let mut byte_order = [0u8; 1];
        self.inner.read_exact(&mut byte_order)
            .context("[io::wkb::read] Failed to read byte order")?;
        self.little_endian = match byte_order[0] {
            WKB_LE => true,
            WKB_BE => false,
            other => bail!("[io::wkb::read] Invalid byte order marker {other}"),
        };
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.inner.get_ref().len().saturating_sub(self.inner.position() as usize)
    }

    fn read_u32(&mut self, what: &str) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.inner.read_exact(&mut buf)
            .with_context(|| format!("[io::wkb::read] Failed to read {what}"))?;
        Ok(if self.little_endian { u32::from_le_bytes(buf) } else { u32::from_be_bytes(buf) })
    }

    fn read_f64(&mut self, what: &str) -> Result<f64> {
        let mut buf = [0u8; 8];
        self.inner.read_exact(&mut buf)
            .with_context(|| format!("[io::wkb::read] Failed to read {what}"))?;
        Ok(if self.little_endian { f64::from_le_bytes(buf) } else { f64::from_be_bytes(buf) })
    }

    /// Read a byte order mark and geometry type, skipping any EWKB SRID.
    fn read_header(&mut self) -> Result<u32> {
        self.read_byte_order()?;
        let raw = self.read_u32("geometry type")?;
        if raw & EWKB_SRID_FLAG != 0 {
            self.read_u32("SRID")?;
        }
        Ok(raw & !EWKB_SRID_FLAG)
    }

    fn read_ring(&mut self) -> Result<LineString<f64>> {
        let len = self.read_u32("ring length")? as usize;
        // a count can never exceed what the remaining bytes could hold
        let mut coords = Vec::with_capacity(len.min(self.remaining() / 16));
        for _ in 0..len {
            let x = self.read_f64("x coordinate")?;
            let y = self.read_f64("y coordinate")?;
            coords.push(Coord { x, y });
        }
        Ok(LineString::from(coords))
    }

    /// Polygon body (after the header).
    fn read_polygon_body(&mut self) -> Result<Polygon<f64>> {
        let num_rings = self.read_u32("number of rings")?;
        if num_rings == 0 {
            return Ok(Polygon::new(LineString::new(vec![]), vec![]));
        }

        let exterior = self.read_ring()?;
        let mut interiors = Vec::with_capacity((num_rings as usize - 1).min(self.remaining() / 4));
        for _ in 1..num_rings {
            interiors.push(self.read_ring()?);
        }

        Ok(Polygon::new(exterior, interiors))
    }

    fn ensure_consumed(&self) -> Result<()> {
        let total = self.inner.get_ref().len() as u64;
        if self.inner.position() != total {
            bail!("[io::wkb::read] {} trailing bytes after geometry", total - self.inner.position());
        }
        Ok(())
    }
}

/// Decode a WKB Polygon or MultiPolygon. Any other geometry type is an error.
pub(crate) fn read_wkb_geometry(bytes: &[u8]) -> Result<Geometry<f64>> {
    let mut cursor = WkbCursor::new(bytes);

    let geometry = match cursor.read_header()? {
        WKB_POLYGON => Geometry::Polygon(cursor.read_polygon_body()?),
        WKB_MULTIPOLYGON => {
            let count = cursor.read_u32("number of polygons")?;
            let mut polygons = Vec::with_capacity((count as usize).min(cursor.remaining() / 9));
            for i in 0..count {
                // each member repeats its own byte order + type
                let ty = cursor.read_header()?;
                if ty != WKB_POLYGON {
                    return Err(anyhow!("[io::wkb::read] MultiPolygon member {i} has geometry type {ty}"));
                }
                polygons.push(cursor.read_polygon_body()?);
            }
            Geometry::MultiPolygon(MultiPolygon::new(polygons))
        }
        other => bail!("[io::wkb::read] Expected Polygon or MultiPolygon geometry type, got {other}"),
    };

    cursor.ensure_consumed()?;
    Ok(geometry)
}
