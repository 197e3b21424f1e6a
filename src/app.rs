use crate::color::ColorModel;
use crate::command::Command;
use crate::document::Document;
use crate::panels;
use crate::renderer::Renderer;

/// We derive Deserialize/Serialize so the chosen color can be restored on
/// the next run. The drawing itself is never persisted.
#[derive(Default, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PainterApp {
    color: ColorModel,
    // Session state, recreated empty on every launch
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    renderer: Renderer,
}

impl PainterApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore the previously chosen slider color, if any
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }

        Self::default()
    }

    pub fn color(&self) -> &ColorModel {
        &self.color
    }

    pub fn color_mut(&mut self) -> &mut ColorModel {
        &mut self.color
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Applies a single input command to the model.
    ///
    /// Undo and redo on empty stacks are defined no-ops; the panel keeps
    /// the buttons disabled in that state, but the command stays safe to
    /// execute regardless.
    pub fn execute(&mut self, command: Command, ctx: &egui::Context) {
        log::debug!("executing command: {:?}", command);

        match command {
            Command::PlaceCircle(circle) => self.document.place(circle),
            Command::Undo => {
                if !self.document.undo() {
                    log::trace!("undo with empty history ignored");
                }
            }
            Command::Redo => {
                if !self.document.redo() {
                    log::trace!("redo with empty redo buffer ignored");
                }
            }
            Command::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}

impl eframe::App for PainterApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
