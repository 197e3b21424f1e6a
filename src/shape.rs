use egui::{Color32, Pos2};

/// Radius shared by every stamped circle.
pub const CIRCLE_RADIUS: f32 = 50.0;

// Immutable placed circle. Color is captured at creation time, so later
// slider changes never touch circles already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Pos2,
    radius: f32,
    color: Color32,
}

impl Circle {
    // Create a new circle at the click position with the current color
    pub fn new(center: Pos2, color: Color32) -> Self {
        Self {
            center,
            radius: CIRCLE_RADIUS,
            color,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}
