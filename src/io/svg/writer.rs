//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use super::Rgb;

/// Fill and stroke for the two map layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LayerStyle {
    pub(crate) fill: Rgb,
    pub(crate) fill_opacity: f64,
    pub(crate) stroke: Rgb,
}

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { std::io::Result::Ok(()) }
}

impl SvgStringWriter {
    /// Create a new string-based SVG writer
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

impl SvgWriter {
    /// Create a new SVG writer to a file path
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

/// Write the XML declaration and opening <svg> tag, recording the view state.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, width: u32, height: u32, center: (f64, f64), zoom: f64) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width}" height="{height}"
        viewBox="0 0 {width} {height}"
        data-center-lon="{lon}" data-center-lat="{lat}" data-zoom="{zoom}">"##,
        lon = center.0,
        lat = center.1,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    Ok(())
}

/// Write the stylesheet for the base (`.county`) and highlight (`.selected`) layers.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W, base: &LayerStyle, highlight: &LayerStyle) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .county {{ fill: {base_fill}; fill-opacity: {base_opacity}; stroke: {base_stroke}; stroke-width: 0.5; fill-rule: nonzero; }}
    .selected {{ fill: {hi_fill}; fill-opacity: {hi_opacity}; stroke: {hi_stroke}; stroke-width: 2; fill-rule: nonzero; }}
    .county:hover {{ fill-opacity: {hover_opacity}; }}
</style>
</defs>"##,
        base_fill = base.fill,
        base_opacity = base.fill_opacity,
        base_stroke = base.stroke,
        hi_fill = highlight.fill,
        hi_opacity = highlight.fill_opacity,
        hi_stroke = highlight.stroke,
        hover_opacity = (base.fill_opacity * 2.0).min(1.0),
    )?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
