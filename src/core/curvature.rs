//! Rekonstruktion einer Kurve aus ihrer lokalen Krümmung.
//!
//! Explizites Euler-Verfahren für `dθ/ds = k(x, y, s)`: der Einheits-Tangentenvektor
//! wird pro Bogenlängen-Schritt `delta` um `k·delta` gedreht, renormiert und die
//! Position entlang der Tangente vorgeschoben. Fehler wächst mit O(delta).

use glam::DVec2;

use super::sampler::reserved_capacity;
use super::{Path, Viewport};

/// Zustand nach einem Integrationsschritt (Welt-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureStep {
    /// Zurückgelegte Bogenlänge nach diesem Schritt
    pub arclength: f64,
    /// Neue Position
    pub position: DVec2,
    /// Einheits-Tangente, mit der vorgeschoben wurde
    pub tangent: DVec2,
}

/// Iterator über die Schritte einer Krümmungs-Integration.
///
/// Endet nach `ceil(total/delta) + 1` Schritten; keine Divergenz-Prüfung,
/// ein NaN aus dem Krümmungsfeld verdirbt alle folgenden Positionen.
pub struct CurvatureSteps<K> {
    curvature: K,
    delta: f64,
    limit: f64,
    arclength: f64,
    position: DVec2,
    tangent: DVec2,
}

impl<K: Fn(f64, f64, f64) -> f64> Iterator for CurvatureSteps<K> {
    type Item = CurvatureStep;

    fn next(&mut self) -> Option<Self::Item> {
        if !(self.arclength < self.limit) {
            return None;
        }

        let k = (self.curvature)(self.position.x, self.position.y, self.arclength);
        let (sin, cos) = (k * self.delta).sin_cos();
        let rotated = DVec2::new(
            self.tangent.x * cos - self.tangent.y * sin,
            self.tangent.x * sin + self.tangent.y * cos,
        );
        // Renormieren gegen Drift über viele Schritte; NaN bleibt NaN
        self.tangent = rotated / rotated.length();
        self.position += self.tangent * self.delta;
        self.arclength += self.delta;

        Some(CurvatureStep {
            arclength: self.arclength,
            position: self.position,
            tangent: self.tangent,
        })
    }
}

/// Integriert Krümmungsfelder zu Pfaden im Viewport.
#[derive(Debug, Clone, Copy)]
pub struct CurvaturePathIntegrator<'a> {
    viewport: &'a Viewport,
}

impl<'a> CurvaturePathIntegrator<'a> {
    /// Erstellt einen Integrator mit der Schrittweite `delta` des Viewports.
    pub fn new(viewport: &'a Viewport) -> Self {
        Self { viewport }
    }

    /// Schrittweise Integration ab `start` in Richtung `theta` (Radiant).
    pub fn steps<K>(
        &self,
        curvature: K,
        start: DVec2,
        theta: f64,
        total_arclength: f64,
    ) -> CurvatureSteps<K>
    where
        K: Fn(f64, f64, f64) -> f64,
    {
        let delta = self.viewport.delta();
        CurvatureSteps {
            curvature,
            delta,
            limit: total_arclength + delta,
            arclength: 0.0,
            position: start,
            tangent: DVec2::from_angle(theta),
        }
    }

    /// Integriert das Feld und liefert den Pfad in Geräte-Koordinaten, beginnend bei `start`.
    pub fn integrate(
        &self,
        curvature: impl Fn(f64, f64, f64) -> f64,
        start: DVec2,
        theta: f64,
        total_arclength: f64,
    ) -> Path {
        let vp = self.viewport;
        let mut path = Path::with_capacity(reserved_capacity(total_arclength, vp.delta(), 3));
        path.push(vp.to_device(start));
        path.extend(
            self.steps(curvature, start, theta, total_arclength)
                .map(|step| vp.to_device(step.position)),
        );
        log::debug!(
            "Krümmungs-Pfad über Bogenlänge {}: {} Punkte",
            total_arclength,
            path.len()
        );
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn viewport() -> Viewport {
        Viewport::new(-4.0, 4.0, -4.0, 4.0, 800.0, 800.0).unwrap()
    }

    #[test]
    fn test_zero_curvature_is_straight_line() {
        let vp = viewport();
        let integrator = CurvaturePathIntegrator::new(&vp);
        let last = integrator
            .steps(|_, _, _| 0.0, DVec2::ZERO, 0.0, 2.0)
            .last()
            .unwrap();
        assert_relative_eq!(last.position.y, 0.0);
        assert!(last.position.x >= 2.0 - 1e-9);
        assert_relative_eq!(last.tangent.x, 1.0);
    }

    #[test]
    fn test_step_count_matches_ceil() {
        let vp = viewport();
        let integrator = CurvaturePathIntegrator::new(&vp);
        // 1.0 / 0.008 = 125 → 126 Schritte (Gleitkomma-Summe kann um einen abweichen)
        let count = integrator.steps(|_, _, _| 1.0, DVec2::ZERO, 0.0, 1.0).count();
        assert!((126..=127).contains(&count), "count = {}", count);
        let count = integrator.steps(|_, _, _| 1.0, DVec2::ZERO, 0.0, 1.003).count();
        assert!((127..=128).contains(&count), "count = {}", count);
    }

    #[test]
    fn test_constant_curvature_closes_circle() {
        let vp = viewport();
        let integrator = CurvaturePathIntegrator::new(&vp);
        let k = 2.0;
        let start = DVec2::new(0.5, -0.25);
        let total = 2.0 * PI / k;
        let last = integrator
            .steps(|_, _, _| k, start, PI / 3.0, total)
            .last()
            .unwrap();
        // Überschießen um höchstens ~2 Schritte plus O(delta)-Fehler
        assert!(last.position.distance(start) < 4.0 * vp.delta());
    }

    #[test]
    fn test_constant_curvature_stays_on_radius() {
        let vp = viewport();
        let integrator = CurvaturePathIntegrator::new(&vp);
        let k: f64 = -0.5;
        // Start bei (2, 0) nach oben, negative Krümmung dreht rechts → Mittelpunkt (4, 0)
        let start = DVec2::new(2.0, 0.0);
        let center = start + DVec2::new(1.0 / k.abs(), 0.0);
        for step in integrator.steps(|_, _, _| k, start, PI / 2.0, 2.0 * PI / k.abs()) {
            assert_relative_eq!(step.position.distance(center), 2.0, epsilon = 0.05);
        }
    }

    #[test]
    fn test_tangent_stays_unit_length() {
        let vp = viewport();
        let integrator = CurvaturePathIntegrator::new(&vp);
        let field = |x: f64, y: f64, s: f64| (3.0 * x).sin() * 4.0 + y * y - s.cos();
        for step in integrator.steps(field, DVec2::new(-1.0, 0.3), 0.7, 25.0) {
            assert_relative_eq!(step.tangent.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_arclength_is_passed_to_field() {
        let vp = viewport();
        let integrator = CurvaturePathIntegrator::new(&vp);
        let seen = std::cell::RefCell::new(Vec::new());
        let _ = integrator
            .steps(
                |_, _, s| {
                    seen.borrow_mut().push(s);
                    0.0
                },
                DVec2::ZERO,
                0.0,
                0.05,
            )
            .count();
        let seen = seen.into_inner();
        assert_relative_eq!(seen[0], 0.0);
        assert_relative_eq!(seen[1], vp.delta());
    }

    #[test]
    fn test_integrate_starts_at_start_point() {
        let vp = viewport();
        let path =
            CurvaturePathIntegrator::new(&vp).integrate(|_, _, _| 0.0, DVec2::ZERO, 0.0, 1.0);
        assert_eq!(path.first(), Some(DVec2::new(400.0, 400.0)));
        assert!(path.len() >= 127);
    }

    #[test]
    fn test_nan_curvature_terminates() {
        let vp = viewport();
        let count = CurvaturePathIntegrator::new(&vp)
            .steps(|_, _, _| f64::NAN, DVec2::ZERO, 0.0, 0.4)
            .inspect(|step| assert!(step.position.x.is_nan()))
            .count();
        assert!(count >= 51);
    }
}
