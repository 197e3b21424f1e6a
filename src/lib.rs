#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod document;
pub mod panels;
pub mod renderer;
pub mod shape;

pub use app::PainterApp;
pub use color::{Channel, ColorModel};
pub use command::Command;
pub use document::Document;
pub use renderer::Renderer;
pub use shape::{CIRCLE_RADIUS, Circle};
