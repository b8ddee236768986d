mod bbox;
mod normalize;
mod ring;
mod validity;

use bbox::BoundingBox;
pub use normalize::{normalize, Ring};
pub use ring::signed_area;
pub use validity::is_valid;
