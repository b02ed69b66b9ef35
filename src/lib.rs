//! Curve Plotter Library.
//! Numerischer Kern (Viewport, Abtastung, Krümmungs-Integration, implizite Kurven)
//! als Library exportiert für Tests, Benchmarks und den Fenster-Host.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{PlotItem, Plotter, Scene};
pub use core::{
    BoundPolicy, CurvaturePathIntegrator, CurvatureStep, CurveSampler, FiniteCheck,
    ImplicitLocusFinder, NewtonMode, Path, Viewport, ViewportError,
};
pub use render::{DrawCommand, DrawingSurface, EguiSurface, RecordingSurface};
pub use shared::PlotterOptions;
