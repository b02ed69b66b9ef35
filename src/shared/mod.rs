//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und der Host gemeinsam nutzen.

pub mod options;

pub use options::PlotterOptions;
pub use options::{AXIS_COLOR, BACKGROUND_COLOR, GRID_COLOR};
