use geo::Coord;

/// Signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise rings, negative for clockwise, zero for
/// degenerate ones. Accepts either `geo` coordinates or plain `[x, y]` pairs.
pub fn signed_area<P: Copy + Into<Coord<f64>>>(ring: &[P]) -> f64 {
    let mut a = 0.0;
    for w in ring.windows(2) {
        let (p, q): (Coord<f64>, Coord<f64>) = (w[0].into(), w[1].into());
        a += p.x * q.y - q.x * p.y;
    }
    a / 2.0
}
