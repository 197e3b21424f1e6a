use egui::{Color32, Painter, Rect};

use crate::document::Document;

/// Draws the document onto the canvas.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the canvas background and every placed circle in draw
    /// order, oldest first, so later circles paint over earlier ones.
    /// The painter is expected to be clipped to `rect`, which crops
    /// circles stamped near the canvas edge.
    pub fn render(&self, painter: &Painter, rect: Rect, document: &Document) {
        painter.rect_filled(rect, 0.0, self.background);

        for circle in document.circles() {
            painter.circle_filled(circle.center(), circle.radius(), circle.color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Circle;
    use egui::Pos2;

    fn test_painter(ctx: &egui::Context, rect: Rect) -> Painter {
        Painter::new(ctx.clone(), egui::LayerId::background(), rect)
    }

    #[test]
    fn test_render_empty_document() {
        let renderer = Renderer::new();
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(500.0, 500.0));
        let painter = test_painter(&ctx, rect);

        renderer.render(&painter, rect, &Document::new());
    }

    #[test]
    fn test_render_placed_circles() {
        let renderer = Renderer::new();
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(500.0, 500.0));
        let painter = test_painter(&ctx, rect);

        let mut document = Document::new();
        document.place(Circle::new(Pos2::new(10.0, 10.0), Color32::RED));
        document.place(Circle::new(Pos2::new(490.0, 490.0), Color32::BLUE));

        renderer.render(&painter, rect, &document);
    }
}
