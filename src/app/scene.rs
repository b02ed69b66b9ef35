//! Szene: Liste der Kurven, die pro Frame neu gezeichnet werden.

use std::f64::consts::PI;

use glam::DVec2;

use super::plotter::Plotter;
use crate::render::{Color, DrawingSurface};

/// Funktion eines Parameters (x, y oder t).
pub type CurveFn = Box<dyn Fn(f64) -> f64>;
/// Skalarfeld `(x, y)`.
pub type FieldFn = Box<dyn Fn(f64, f64) -> f64>;
/// Krümmungsfeld `(x, y, s)`.
pub type CurvatureFn = Box<dyn Fn(f64, f64, f64) -> f64>;

/// Ein darstellbares Element der Szene mit seiner Farbe.
pub enum PlotItem {
    /// `y = f(x)`
    FunctionOfX { f: CurveFn, color: Color },
    /// `x = f(y)`
    FunctionOfY { f: CurveFn, color: Color },
    /// `(x(t), y(t))`, `t ∈ [t_start, t_end]`
    Parametric {
        x: CurveFn,
        y: CurveFn,
        t_start: f64,
        t_end: f64,
        color: Color,
    },
    /// Kurve aus Krümmungsfeld, Start `start`, Richtung `theta`
    AntiCurvature {
        curvature: CurvatureFn,
        start: DVec2,
        theta: f64,
        total_arclength: f64,
        color: Color,
    },
    /// Punktwolke von `f(x, y) = g(x, y)`
    Equivalence { f: FieldFn, g: FieldFn, color: Color },
    /// Einzelner Punkt mit Radius in Pixeln
    Point {
        position: DVec2,
        radius: f64,
        color: Color,
    },
}

impl PlotItem {
    pub fn function_of_x(f: impl Fn(f64) -> f64 + 'static, color: Color) -> Self {
        PlotItem::FunctionOfX {
            f: Box::new(f),
            color,
        }
    }

    pub fn function_of_y(f: impl Fn(f64) -> f64 + 'static, color: Color) -> Self {
        PlotItem::FunctionOfY {
            f: Box::new(f),
            color,
        }
    }

    pub fn parametric(
        x: impl Fn(f64) -> f64 + 'static,
        y: impl Fn(f64) -> f64 + 'static,
        t_start: f64,
        t_end: f64,
        color: Color,
    ) -> Self {
        PlotItem::Parametric {
            x: Box::new(x),
            y: Box::new(y),
            t_start,
            t_end,
            color,
        }
    }

    pub fn anti_curvature(
        curvature: impl Fn(f64, f64, f64) -> f64 + 'static,
        start: DVec2,
        theta: f64,
        total_arclength: f64,
        color: Color,
    ) -> Self {
        PlotItem::AntiCurvature {
            curvature: Box::new(curvature),
            start,
            theta,
            total_arclength,
            color,
        }
    }

    pub fn equivalence(
        f: impl Fn(f64, f64) -> f64 + 'static,
        g: impl Fn(f64, f64) -> f64 + 'static,
        color: Color,
    ) -> Self {
        PlotItem::Equivalence {
            f: Box::new(f),
            g: Box::new(g),
            color,
        }
    }

    /// Zeichnet das Element in seiner Farbe (Linien: Linienfarbe, Punkte: Füllfarbe).
    pub fn draw<S: DrawingSurface + ?Sized>(&self, plotter: &mut Plotter<'_, S>) {
        match self {
            PlotItem::FunctionOfX { f, color } => {
                plotter.set_stroke_color(*color);
                plotter.function_of_x(f.as_ref());
            }
            PlotItem::FunctionOfY { f, color } => {
                plotter.set_stroke_color(*color);
                plotter.function_of_y(f.as_ref());
            }
            PlotItem::Parametric {
                x,
                y,
                t_start,
                t_end,
                color,
            } => {
                plotter.set_stroke_color(*color);
                plotter.parametric(x.as_ref(), y.as_ref(), *t_start, *t_end);
            }
            PlotItem::AntiCurvature {
                curvature,
                start,
                theta,
                total_arclength,
                color,
            } => {
                plotter.set_stroke_color(*color);
                plotter.anti_curvature(curvature.as_ref(), *start, *theta, *total_arclength);
            }
            PlotItem::Equivalence { f, g, color } => {
                plotter.set_fill_color(*color);
                plotter.equivalence(f.as_ref(), g.as_ref());
            }
            PlotItem::Point {
                position,
                radius,
                color,
            } => {
                plotter.set_fill_color(*color);
                plotter.plot_point(*position, *radius);
            }
        }
    }
}

impl std::fmt::Debug for PlotItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlotItem::FunctionOfX { .. } => "FunctionOfX",
            PlotItem::FunctionOfY { .. } => "FunctionOfY",
            PlotItem::Parametric { .. } => "Parametric",
            PlotItem::AntiCurvature { .. } => "AntiCurvature",
            PlotItem::Equivalence { .. } => "Equivalence",
            PlotItem::Point { .. } => "Point",
        };
        f.write_str(name)
    }
}

/// Geordnete Liste von Elementen; Zeichenreihenfolge = Einfügereihenfolge.
#[derive(Debug, Default)]
pub struct Scene {
    items: Vec<PlotItem>,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Fügt ein Element hinzu.
    pub fn push(&mut self, item: PlotItem) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Alle Elemente in Zeichenreihenfolge.
    pub fn items(&self) -> &[PlotItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Beispielszene: Bernoulli-Lemniskate, x-Achse als Funktion,
    /// Krümmungs-Kurve `k = 0.88·sin(x)` und die Lemniskate erneut als implizite Kurve.
    pub fn demo() -> Self {
        const LEMNISCATE_SCALE: f64 = 3.3484;

        let mut scene = Scene::new();
        scene
            .push(PlotItem::parametric(
                |t| LEMNISCATE_SCALE * t.cos() / (1.0 + t.sin().powi(2)),
                |t| LEMNISCATE_SCALE * t.sin() * t.cos() / (1.0 + t.sin().powi(2)),
                0.0,
                2.0 * PI,
                rgb(70, 240, 0),
            ))
            .push(PlotItem::function_of_x(|_| 0.0, rgb(255, 50, 10)))
            .push(PlotItem::anti_curvature(
                |x, _, _| x.sin() * 0.88,
                DVec2::ZERO,
                -PI / 4.0,
                100.0,
                rgb(50, 150, 255),
            ))
            .push(PlotItem::equivalence(
                |x, y| (x * x + y * y).powi(2),
                |x, y| x * x - y * y,
                rgb(255, 130, 0),
            ));
        scene
    }
}

/// Deckende Farbe aus 8-Bit-Kanälen.
pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}
