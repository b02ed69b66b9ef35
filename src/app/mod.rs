//! Anwendungsschicht: Zeichen-API und Szenenverwaltung über dem numerischen Kern.

pub mod plotter;
pub mod scene;

pub use plotter::Plotter;
pub use scene::{rgb, PlotItem, Scene};
