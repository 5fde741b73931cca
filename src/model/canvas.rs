use super::{ImageId, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }
}

/// Horizontal anchoring for text drawn with [`Canvas::text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    TopRight,
}

/// The drawing calls the game needs from the graphics toolkit.
pub trait Canvas {
    fn fill(&mut self, color: Color);
    fn blit(&mut self, image: ImageId, bounds: &Rect);
    fn stroke_rect(&mut self, bounds: &Rect, line_width: f64, color: Color);
    /// Draws `text` so that its bounding box touches `(x, y)` at the given anchor.
    fn text(&mut self, text: &str, x: f64, y: f64, anchor: TextAnchor, size: f64, color: Color);
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Fill(Color),
        Blit(ImageId, Rect),
        StrokeRect(Rect, f64, Color),
        Text(String, f64, f64, TextAnchor),
    }

    #[derive(Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn fill(&mut self, color: Color) {
            self.calls.push(DrawCall::Fill(color));
        }

        fn blit(&mut self, image: ImageId, bounds: &Rect) {
            self.calls.push(DrawCall::Blit(image, *bounds));
        }

        fn stroke_rect(&mut self, bounds: &Rect, line_width: f64, color: Color) {
            self.calls.push(DrawCall::StrokeRect(*bounds, line_width, color));
        }

        fn text(&mut self, text: &str, x: f64, y: f64, anchor: TextAnchor, _size: f64, _color: Color) {
            self.calls.push(DrawCall::Text(text.to_string(), x, y, anchor));
        }
    }
}
