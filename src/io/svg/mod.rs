//! SVG writing operations for the county map.

mod color;
mod path;
mod writer;

pub(crate) use color::*;
pub(crate) use path::*;
pub(crate) use writer::*;
