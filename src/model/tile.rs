use log::trace;

use super::{Canvas, Color, ImageId, Point, Rect};

pub const BORDER_WIDTH: f64 = 3.0;
pub const BORDER_COLOR: Color = Color::BLACK;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExposureState {
    Hidden,
    Exposed,
    Matched,
}

#[derive(Clone, Debug)]
pub struct Tile {
    bounds: Rect,
    hidden_image: ImageId,
    exposed_image: ImageId,
    state: ExposureState,
}

impl Tile {
    pub fn new(bounds: Rect, hidden_image: ImageId, exposed_image: ImageId) -> Self {
        Self {
            bounds,
            hidden_image,
            exposed_image,
            state: ExposureState::Hidden,
        }
    }

    /// Reveals the face if `point` is inside this tile and the tile is hidden.
    pub fn expose(&mut self, point: Point) {
        if self.state == ExposureState::Hidden && self.bounds.contains(point) {
            trace!(target: "tile", "Exposing {:?} at {:?}", self.exposed_image, self.bounds);
            self.state = ExposureState::Exposed;
        }
    }

    pub fn hide(&mut self) {
        self.state = ExposureState::Hidden;
    }

    pub fn mark_matched(&mut self) {
        self.state = ExposureState::Matched;
    }

    /// True while the face image is on screen, for exposed and matched tiles alike.
    pub fn is_showing_face(&self) -> bool {
        self.state != ExposureState::Hidden
    }

    /// True for a face-up tile that has not been paired yet.
    pub fn is_awaiting_match(&self) -> bool {
        self.state == ExposureState::Exposed
    }

    pub fn is_matched(&self) -> bool {
        self.state == ExposureState::Matched
    }

    pub fn state(&self) -> ExposureState {
        self.state
    }

    pub fn image_identity(&self) -> ImageId {
        self.exposed_image
    }

    pub fn displayed_image(&self) -> ImageId {
        match self.state {
            ExposureState::Hidden => self.hidden_image,
            ExposureState::Exposed | ExposureState::Matched => self.exposed_image,
        }
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.blit(self.displayed_image(), &self.bounds);
        canvas.stroke_rect(&self.bounds, BORDER_WIDTH, BORDER_COLOR);
    }
}
