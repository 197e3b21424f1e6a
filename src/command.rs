use crate::shape::Circle;

/// Discrete input messages produced by the UI panels.
///
/// Every widget interaction becomes one of these, handled synchronously by
/// [`crate::PainterApp::execute`] on the UI thread, so command ordering is
/// exactly input ordering.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Stamp a circle on the canvas
    PlaceCircle(Circle),
    /// Remove the most recently placed circle
    Undo,
    /// Restore the most recently undone circle
    Redo,
    /// Close the window; never touches the document
    Quit,
}
