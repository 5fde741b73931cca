pub mod canvas;
mod image_id;
mod input_event;
mod layout;
mod tile;
mod timer_state;

pub use canvas::{Canvas, Color, TextAnchor};
pub use image_id::{ImageId, FACE_COUNT};
pub use input_event::InputEvent;
pub use layout::{Dimensions, Point, Rect};
pub use tile::{ExposureState, Tile, BORDER_COLOR, BORDER_WIDTH};
pub use timer_state::TimerState;
