use crate::PainterApp;
use crate::color::Channel;
use crate::command::Command;

/// Top panel: color chooser on the left, undo/redo/quit on the right.
pub fn tools_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            color_chooser(app, ui);

            ui.separator();

            let can_undo = app.document().can_undo();
            let can_redo = app.document().can_redo();

            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.execute(Command::Undo, ctx);
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.execute(Command::Redo, ctx);
            }

            ui.separator();

            if ui.button("Quit").clicked() {
                log::info!("Quit requested from UI");
                app.execute(Command::Quit, ctx);
            }
        });
    });
}

/// One slider row per channel, with a live sample swatch next to them.
fn color_chooser(app: &mut PainterApp, ui: &mut egui::Ui) {
    ui.vertical(|ui| {
        for channel in Channel::ALL {
            ui.horizontal(|ui| {
                ui.label(channel.label());

                let mut value = app.color().channel(channel);
                if ui.add(egui::Slider::new(&mut value, 0..=255)).changed() {
                    app.color_mut().set_channel(channel, value);
                }
            });
        }
    });

    // Sample swatch showing the composite color, updated on every drag
    let (swatch, _) = ui.allocate_exact_size(egui::vec2(50.0, 50.0), egui::Sense::hover());
    ui.painter()
        .rect_filled(swatch, 0.0, app.color().current_color());
}
