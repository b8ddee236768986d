mod layer;
mod render;
mod view;

pub use layer::{prepare_layers, write_layers_json, PreparedLayer};
pub use render::{render_svg, render_svg_string, write_svg};
pub use view::MapView;
