use std::{io::Write, path::Path};

use anyhow::{bail, Context, Result};
use tracing::debug;

use super::MapView;
use crate::{
    common,
    io::svg::{
        escape_xml, rings_to_path, write_svg_footer, write_svg_header, write_svg_styles,
        LayerStyle, Rgb, SvgStringWriter, SvgWriter,
    },
    CountyTable, MapSettings,
};

fn layer_styles(settings: &MapSettings) -> Result<(LayerStyle, LayerStyle)> {
    let base = LayerStyle {
        fill: Rgb::from_hex(&settings.base_fill).context("[map::render] map.base_fill")?,
        fill_opacity: settings.base_opacity.clamp(0.0, 1.0),
        stroke: Rgb::from_hex(&settings.base_stroke).context("[map::render] map.base_stroke")?,
    };
    let highlight = LayerStyle {
        fill: Rgb::from_hex(&settings.highlight_fill).context("[map::render] map.highlight_fill")?,
        fill_opacity: settings.highlight_opacity.clamp(0.0, 1.0),
        stroke: Rgb::from_hex(&settings.highlight_stroke).context("[map::render] map.highlight_stroke")?,
    };
    Ok((base, highlight))
}

/// Draw the county map: every county in the base layer, then `selected` again
/// on top in the highlight layer. Each county group carries a `<title>` tooltip.
pub fn render_svg<W: Write>(
    writer: &mut W,
    counties: &CountyTable,
    selected: &str,
    view: &MapView,
    settings: &MapSettings,
) -> Result<()> {
    if !counties.has_geometry() {
        bail!("[map::render] geo dataset has no geometry column; cannot draw a map");
    }
    let selected_idx = counties.position(selected)?;
    let (base, highlight) = layer_styles(settings)?;
    let project = view.projector(settings.width, settings.height);

    write_svg_header(writer, settings.width, settings.height, (view.longitude, view.latitude), view.zoom)?;
    write_svg_styles(writer, &base, &highlight)?;

    writeln!(writer, r#"<g id="base-layer">"#)?;
    for (i, record) in counties.records().iter().enumerate() {
        let Some(rings) = counties.shape(i).filter(|r| !r.is_empty()) else { continue };
        let name = escape_xml(&record.name);
        writeln!(writer, r#"<g class="county" data-name="{name}"><title>{name}</title><path d="{}"/></g>"#,
            rings_to_path(rings, &project))?;
    }
    writeln!(writer, "</g>")?;

    writeln!(writer, r#"<g id="highlight-layer">"#)?;
    if let Some(rings) = counties.shape(selected_idx) {
        let name = escape_xml(selected);
        writeln!(writer, r#"<g class="selected" data-name="{name}"><title>{name}</title><path d="{}"/></g>"#,
            rings_to_path(rings, &project))?;
    }
    writeln!(writer, "</g>")?;

    write_svg_footer(writer)?;
    debug!("[map::render] drew {} counties, highlight {selected:?}", counties.len());
    Ok(())
}

/// Render to an in-memory SVG document.
pub fn render_svg_string(counties: &CountyTable, selected: &str, view: &MapView, settings: &MapSettings) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    render_svg(&mut writer, counties, selected, view, settings)?;
    writer.into_string()
}

/// Render to a file, creating parent directories as needed.
pub fn write_svg(path: &Path, counties: &CountyTable, selected: &str, view: &MapView, settings: &MapSettings) -> Result<()> {
    common::ensure_parent_dir(path)?;
    let mut writer = SvgWriter::new(path)?;
    render_svg(&mut writer, counties, selected, view, settings)?;
    writer.flush()
        .with_context(|| format!("[map::render] Failed to write {}", path.display()))?;
    Ok(())
}
