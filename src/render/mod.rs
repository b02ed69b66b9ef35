//! Zeichenflächen: abstrakter Vertrag, Aufzeichnung und egui-Anbindung.

mod egui_surface;
mod surface;

pub use egui_surface::{to_color32, EguiSurface};
pub use surface::{Color, DrawCommand, DrawingSurface, RecordingSurface};
