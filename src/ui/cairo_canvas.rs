use gtk4::cairo::{Context, FontSlant, FontWeight};
use gtk4::gdk::prelude::GdkCairoContextExt;
use log::{error, warn};

use super::image_set::ImageSet;
use crate::model::{Canvas, Color, ImageId, Rect, TextAnchor};

const FONT_FAMILY: &str = "Sans";

/// Draws onto the cairo context handed to a `DrawingArea` draw function.
pub struct CairoCanvas<'a> {
    cr: &'a Context,
    images: &'a ImageSet,
}

impl<'a> CairoCanvas<'a> {
    pub fn new(cr: &'a Context, images: &'a ImageSet) -> Self {
        Self { cr, images }
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgb(color.red, color.green, color.blue);
    }

    fn report(result: Result<(), gtk4::cairo::Error>, what: &str) {
        if let Err(e) = result {
            error!(target: "canvas", "cairo {} failed: {}", what, e);
        }
    }
}

impl Canvas for CairoCanvas<'_> {
    fn fill(&mut self, color: Color) {
        self.set_color(color);
        Self::report(self.cr.paint(), "paint");
    }

    fn blit(&mut self, image: ImageId, bounds: &Rect) {
        let Some(pixbuf) = self.images.get(image) else {
            warn!(target: "canvas", "No image loaded for {}", image);
            return;
        };
        self.cr
            .set_source_pixbuf(pixbuf, bounds.left as f64, bounds.top as f64);
        self.cr.rectangle(
            bounds.left as f64,
            bounds.top as f64,
            bounds.width as f64,
            bounds.height as f64,
        );
        Self::report(self.cr.fill(), "fill");
    }

    fn stroke_rect(&mut self, bounds: &Rect, line_width: f64, color: Color) {
        // cairo strokes are centred on the path; inset so the border stays inside the tile
        let inset = line_width / 2.0;
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.cr.rectangle(
            bounds.left as f64 + inset,
            bounds.top as f64 + inset,
            bounds.width as f64 - line_width,
            bounds.height as f64 - line_width,
        );
        Self::report(self.cr.stroke(), "stroke");
    }

    fn text(&mut self, text: &str, x: f64, y: f64, anchor: TextAnchor, size: f64, color: Color) {
        self.cr
            .select_font_face(FONT_FAMILY, FontSlant::Normal, FontWeight::Normal);
        self.cr.set_font_size(size);
        let extents = match self.cr.text_extents(text) {
            Ok(extents) => extents,
            Err(e) => {
                error!(target: "canvas", "cairo text_extents failed: {}", e);
                return;
            }
        };
        let left = match anchor {
            TextAnchor::TopRight => x - extents.width() - extents.x_bearing(),
        };
        let baseline = y - extents.y_bearing();

        self.set_color(color);
        self.cr.move_to(left, baseline);
        Self::report(self.cr.show_text(text), "show_text");
    }
}
