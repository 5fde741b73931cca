pub mod cairo_canvas;
pub mod frame_loop;
pub mod image_set;
pub mod window;

pub use image_set::{AssetError, ImageSet};
