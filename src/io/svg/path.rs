//! Ring-to-path conversion for SVG output.

/// Projection function: lon/lat -> SVG coords (x,y)
pub(crate) type Projection<'a> = dyn Fn(&[f64; 2]) -> (f64, f64) + 'a;

/// Build a compact SVG path string for a set of rings: " M x,y L x,y ... Z" per ring.
pub(crate) fn rings_to_path(rings: &[Vec<[f64; 2]>], project: &Projection<'_>) -> String {
    let mut out = String::new();

    for ring in rings {
        let mut coords = ring.iter().map(|coord| project(coord));
        if let Some((x, y)) = coords.next() {
            out.push_str(&format!(" M{x:.3},{y:.3}"));
            for (x, y) in coords {
                out.push_str(&format!(" L{x:.3},{y:.3}"));
            }
            out.push('Z');
        }
    }

    out
}

/// Escape text for use in SVG element content and attribute values.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
