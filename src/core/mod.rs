//! Numerischer Kern: Viewport, Kurven-Abtastung, Krümmungs-Integration, implizite Kurven.

pub mod curvature;
pub mod implicit;
pub mod path;
pub mod sampler;
pub mod validation;
pub mod viewport;

pub use curvature::{CurvaturePathIntegrator, CurvatureStep, CurvatureSteps};
pub use implicit::{newton_step, ImplicitLocusFinder, NewtonMode};
pub use path::Path;
pub use sampler::{BoundPolicy, CurveSampler};
pub use validation::FiniteCheck;
pub use viewport::{Viewport, ViewportError};
