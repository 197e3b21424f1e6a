use crate::PainterApp;
use crate::command::Command;
use crate::shape::Circle;

/// The drawing canvas. A primary click stamps a circle with the current
/// color; rendering happens last so new placements show up in the same
/// frame.
pub fn central_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let canvas_rect = response.rect;

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let circle = Circle::new(pos, app.color().current_color());
                app.execute(Command::PlaceCircle(circle), ctx);
            }
        }

        app.renderer().render(&painter, canvas_rect, app.document());
    });
}
