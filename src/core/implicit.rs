//! Streupunkt-Näherung impliziter Kurven `F(x, y) = 0` per Gradienten-Newton.
//!
//! Ein `resolution × resolution`-Gitter von Startpunkten wird mit einer festen
//! Anzahl von Newton-Schritten auf die Nullstellenmenge gezogen. Die Korrektur
//! erfolgt entlang des Gradienten (Vorwärts-Differenzen mit Schrittweite `delta`),
//! da das Ziel eine 1D-Niveaumenge ist und keine isolierte 2D-Nullstelle.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::Viewport;
use crate::render::DrawingSurface;

/// Standard-Gitterauflösung pro Achse.
pub const DEFAULT_RESOLUTION: usize = 20;
/// Standard-Anzahl der Newton-Schritte pro Startpunkt.
pub const DEFAULT_NEWTON_ITERATIONS: usize = 10;

/// Iterations-Modus des Newton-Verfahrens.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum NewtonMode {
    /// Immer exakt `iterations` Schritte, keine Prüfung; jeder Startpunkt wird ausgegeben.
    #[default]
    Fixed,
    /// Abbruch bei `|F| < tolerance`; verwirft nicht-endliche und nicht konvergierte
    /// Punkte sowie Punkte näher als `min_separation` an einem bereits gefundenen.
    Converging { tolerance: f64, min_separation: f64 },
}

/// Findet Punkte auf der Nullstellenmenge eines Skalarfelds im Viewport.
#[derive(Debug, Clone, Copy)]
pub struct ImplicitLocusFinder<'a> {
    viewport: &'a Viewport,
    resolution: usize,
    iterations: usize,
    mode: NewtonMode,
}

impl<'a> ImplicitLocusFinder<'a> {
    /// Finder mit 20×20 Startpunkten und 10 festen Newton-Schritten.
    pub fn new(viewport: &'a Viewport) -> Self {
        Self {
            viewport,
            resolution: DEFAULT_RESOLUTION,
            iterations: DEFAULT_NEWTON_ITERATIONS,
            mode: NewtonMode::Fixed,
        }
    }

    /// Setzt die Gitterauflösung pro Achse.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Setzt die (maximale) Anzahl der Newton-Schritte.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Setzt den Iterations-Modus.
    pub fn with_mode(mut self, mode: NewtonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Startpunkte: Gitter ab `(left, bottom)`, Koordinaten durch Aufaddieren gebildet.
    pub fn seeds(&self) -> Vec<DVec2> {
        let vp = self.viewport;
        let n = self.resolution;
        let step_x = vp.width() / n as f64;
        let step_y = vp.height() / n as f64;

        let mut seeds = Vec::with_capacity(n * n);
        let mut x = vp.left();
        for _ in 0..n {
            let mut y = vp.bottom();
            for _ in 0..n {
                seeds.push(DVec2::new(x, y));
                y += step_y;
            }
            x += step_x;
        }
        seeds
    }

    /// Zieht jeden Startpunkt auf `field(x, y) = 0` und liefert die Welt-Punkte.
    pub fn locate(&self, field: impl Fn(f64, f64) -> f64) -> Vec<DVec2> {
        let delta = self.viewport.delta();
        let seeds = self.seeds();
        let seed_count = seeds.len();

        let points: Vec<DVec2> = match self.mode {
            NewtonMode::Fixed => seeds
                .into_iter()
                .map(|mut p| {
                    for _ in 0..self.iterations {
                        p = newton_step(&field, p, delta);
                    }
                    p
                })
                .collect(),
            NewtonMode::Converging {
                tolerance,
                min_separation,
            } => {
                let converged = seeds.into_iter().filter_map(|mut p| {
                    for _ in 0..self.iterations {
                        if field(p.x, p.y).abs() < tolerance {
                            break;
                        }
                        p = newton_step(&field, p, delta);
                    }
                    let residual = field(p.x, p.y);
                    (p.is_finite() && residual.abs() < tolerance).then_some(p)
                });
                dedup_points(converged, min_separation)
            }
        };

        log::debug!(
            "Implizite Kurve: {} von {} Startpunkten ausgegeben ({:?})",
            points.len(),
            seed_count,
            self.mode
        );
        points
    }

    /// Ortskurve von `f(x, y) = g(x, y)` über das Differenzfeld `f - g`.
    pub fn locate_equivalence(
        &self,
        f: impl Fn(f64, f64) -> f64,
        g: impl Fn(f64, f64) -> f64,
    ) -> Vec<DVec2> {
        self.locate(|x, y| f(x, y) - g(x, y))
    }

    /// Zeichnet jeden gefundenen Punkt als gefüllten Kreis mit `radius` Pixeln.
    pub fn plot<S: DrawingSurface + ?Sized>(
        &self,
        field: impl Fn(f64, f64) -> f64,
        surface: &mut S,
        radius: f64,
    ) {
        for point in self.locate(field) {
            surface.fill_circle(self.viewport.to_device(point), radius);
        }
    }
}

/// Ein Gradienten-Newton-Schritt: `p -= F·∇F / |∇F|²`.
///
/// Verschwindender Gradient ergibt 0/0 = NaN, das unverändert weitergegeben wird.
pub fn newton_step(field: impl Fn(f64, f64) -> f64, p: DVec2, delta: f64) -> DVec2 {
    let value = field(p.x, p.y);
    let dfdx = (field(p.x + delta, p.y) - value) / delta;
    let dfdy = (field(p.x, p.y + delta) - value) / delta;
    let norm_sq = dfdx * dfdx + dfdy * dfdy;
    DVec2::new(p.x - value * dfdx / norm_sq, p.y - value * dfdy / norm_sq)
}

/// Behält nur Punkte mit Mindestabstand `min_separation` zu allen zuvor behaltenen.
fn dedup_points(points: impl Iterator<Item = DVec2>, min_separation: f64) -> Vec<DVec2> {
    let min_sq = min_separation * min_separation;
    let mut kept: Vec<DVec2> = Vec::new();
    for p in points {
        if kept.iter().all(|k| k.distance_squared(p) >= min_sq) {
            kept.push(p);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use approx::assert_relative_eq;

    fn unit_viewport() -> Viewport {
        Viewport::new(-2.0, 2.0, -2.0, 2.0, 400.0, 400.0).unwrap()
    }

    fn unit_circle(x: f64, y: f64) -> f64 {
        x * x + y * y - 1.0
    }

    #[test]
    fn test_seed_lattice_covers_viewport() {
        let vp = unit_viewport();
        let seeds = ImplicitLocusFinder::new(&vp).seeds();
        assert_eq!(seeds.len(), 400);
        assert_relative_eq!(seeds[0].x, -2.0);
        assert_relative_eq!(seeds[0].y, -2.0);
        // letzte Zeile/Spalte liegt einen Gitterschritt vor dem Rand
        let last = seeds[seeds.len() - 1];
        assert_relative_eq!(last.x, 1.8, epsilon = 1e-9);
        assert_relative_eq!(last.y, 1.8, epsilon = 1e-9);
    }

    #[test]
    fn test_unit_circle_majority_converges() {
        let vp = unit_viewport();
        let points = ImplicitLocusFinder::new(&vp).locate(unit_circle);
        assert_eq!(points.len(), 400);
        let close = points
            .iter()
            .filter(|p| unit_circle(p.x, p.y).abs() < 0.05)
            .count();
        assert!(close > points.len() / 2, "nur {} Punkte konvergiert", close);
    }

    #[test]
    fn test_newton_step_on_line_lands_exactly() {
        // Lineares Feld: ein Schritt trifft die Gerade x + y = 1
        let p = newton_step(|x, y| x + y - 1.0, DVec2::new(3.0, -0.5), 0.01);
        assert_relative_eq!(p.x + p.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_field_yields_nan() {
        let p = newton_step(|_, _| 1.0, DVec2::new(0.0, 0.0), 0.01);
        assert!(p.x.is_nan() && p.y.is_nan());

        let vp = unit_viewport();
        let points = ImplicitLocusFinder::new(&vp)
            .with_resolution(3)
            .locate(|_, _| 1.0);
        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|p| p.x.is_nan()));
    }

    #[test]
    fn test_converging_mode_filters_and_dedups() {
        let vp = unit_viewport();
        let mode = NewtonMode::Converging {
            tolerance: 1e-6,
            min_separation: 0.1,
        };
        let points = ImplicitLocusFinder::new(&vp).with_mode(mode).locate(unit_circle);
        assert!(!points.is_empty());
        assert!(points.len() < 400);
        for (i, a) in points.iter().enumerate() {
            assert!(unit_circle(a.x, a.y).abs() < 1e-6);
            for b in &points[i + 1..] {
                assert!(a.distance(*b) >= 0.1);
            }
        }

        let none = ImplicitLocusFinder::new(&vp)
            .with_resolution(4)
            .with_mode(mode)
            .locate(|_, _| 1.0);
        assert!(none.is_empty());
    }

    #[test]
    fn test_equivalence_matches_difference_field() {
        let vp = unit_viewport();
        let finder = ImplicitLocusFinder::new(&vp).with_resolution(6);
        let a = finder.locate_equivalence(|x, y| x * x + y * y, |_, _| 1.0);
        let b = finder.locate(unit_circle);
        assert_eq!(a, b);
    }

    #[test]
    fn test_plot_issues_one_circle_per_seed() {
        let vp = unit_viewport();
        let mut surface = RecordingSurface::new(400.0, 400.0);
        ImplicitLocusFinder::new(&vp)
            .with_resolution(5)
            .plot(unit_circle, &mut surface, 1.0);
        assert_eq!(surface.circle_centers().len(), 25);
    }
}
