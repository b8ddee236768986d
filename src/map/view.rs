use std::f64::consts::PI;

use serde::Serialize;

use crate::CountyRecord;

/// Latitude limit of the Web Mercator square.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Pixel width of the whole world at zoom 0.
const TILE_SIZE: f64 = 512.0;

/// Camera over the map: the center in degrees and a Web Mercator zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl MapView {
    /// View centered exactly on a county's centroid.
    pub fn centered_on(county: &CountyRecord, zoom: f64) -> Self {
        Self { longitude: county.longitude(), latitude: county.latitude(), zoom }
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Web Mercator world pixel of a lon/lat pair at this zoom.
    fn world_pixel(&self, lon: f64, lat: f64) -> (f64, f64) {
        let size = self.world_size();
        let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let x = (lon + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
        (x, y)
    }

    /// Projection from lon/lat to canvas pixels, with the view center in the
    /// middle of a `width` x `height` canvas.
    pub fn projector(&self, width: u32, height: u32) -> impl Fn(&[f64; 2]) -> (f64, f64) + '_ {
        let (cx, cy) = self.world_pixel(self.longitude, self.latitude);
        let (half_w, half_h) = (width as f64 / 2.0, height as f64 / 2.0);

        move |c: &[f64; 2]| {
            let (x, y) = self.world_pixel(c[0], c[1]);
            (x - cx + half_w, y - cy + half_h)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn center_lands_mid_canvas() {
        let view = MapView::centered_on(&fixtures::county("Los Angeles", -118.24, 34.05), 5.0);
        let project = view.projector(1000, 700);

        let (x, y) = project(&[-118.24, 34.05]);
        assert!((x - 500.0).abs() < 1e-9);
        assert!((y - 350.0).abs() < 1e-9);
    }

    #[test]
    fn north_is_up_east_is_right() {
        let view = MapView { longitude: 0.0, latitude: 0.0, zoom: 0.0 };
        let project = view.projector(512, 512);

        let (x, y) = project(&[90.0, 45.0]);
        assert!((x - 384.0).abs() < 1e-9);
        assert!(y < 256.0);

        // equator and the antimeridian span the whole world at zoom 0
        assert!((project(&[-180.0, 0.0]).0).abs() < 1e-9);
    }

    #[test]
    fn zoom_doubles_scale() {
        let near = MapView { longitude: 0.0, latitude: 0.0, zoom: 1.0 }.projector(0, 0)(&[10.0, 0.0]).0;
        let far = MapView { longitude: 0.0, latitude: 0.0, zoom: 2.0 }.projector(0, 0)(&[10.0, 0.0]).0;
        assert!((far - 2.0 * near).abs() < 1e-9);
    }
}
