//! Abtastung expliziter und parametrischer Kurven mit fester Schrittweite.
//!
//! Alle drei Varianten laufen über einen skalaren Parameter (x, y oder t)
//! in Schritten von `delta` und sammeln die Geräte-Punkte in einem [`Path`].
//! Der Parameter wird aufaddiert (`p += delta`), nicht aus einem Index
//! berechnet; die Anzahl der Abtastpunkte folgt daraus.

use glam::DVec2;

use super::{Path, Viewport};

/// Obergrenze für vorab reservierte Punkte; längere Pfade wachsen bei Bedarf.
const MAX_RESERVED_POINTS: usize = 1 << 20;

/// Kapazität für `span / delta` Schritte plus `extra`, gedeckelt auf [`MAX_RESERVED_POINTS`].
///
/// Unendliche oder riesige Bereiche sättigen statt überzulaufen; NaN ergibt `extra`.
pub(crate) fn reserved_capacity(span: f64, delta: f64, extra: usize) -> usize {
    let steps = (span / delta).max(0.0) as usize;
    steps.saturating_add(extra).min(MAX_RESERVED_POINTS)
}

/// Abbruchbedingung der Parameter-Schleife.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum BoundPolicy {
    /// `p <= end + delta`: der erste Punkt am oder hinter dem Ende wird mitgenommen.
    #[default]
    TrailingInclusive,
    /// `p <= end`: kein Überschießen über das Ende.
    Strict,
}

impl BoundPolicy {
    /// Prüft, ob der Parameter `p` noch abgetastet wird.
    fn admits(self, p: f64, end: f64, delta: f64) -> bool {
        match self {
            BoundPolicy::TrailingInclusive => p <= end + delta,
            BoundPolicy::Strict => p <= end,
        }
    }
}

/// Tastet Funktionen von x, von y und parametrische Kurven im Viewport ab.
#[derive(Debug, Clone, Copy)]
pub struct CurveSampler<'a> {
    viewport: &'a Viewport,
    y_policy: BoundPolicy,
}

impl<'a> CurveSampler<'a> {
    /// Sampler mit Referenz-Verhalten: y-Funktionen enden strikt bei `top`.
    pub fn new(viewport: &'a Viewport) -> Self {
        Self {
            viewport,
            y_policy: BoundPolicy::Strict,
        }
    }

    /// Überschreibt die Abbruchbedingung für [`Self::function_of_y`].
    pub fn with_y_policy(mut self, policy: BoundPolicy) -> Self {
        self.y_policy = policy;
        self
    }

    /// Aktive Abbruchbedingung für Funktionen von y.
    pub fn y_policy(&self) -> BoundPolicy {
        self.y_policy
    }

    /// `y = f(x)` über `[left, right]`, inklusive des ersten Punkts hinter `right`.
    pub fn function_of_x(&self, f: impl Fn(f64) -> f64) -> Path {
        let vp = self.viewport;
        let path = sample_axis(
            vp,
            vp.left(),
            vp.right(),
            BoundPolicy::TrailingInclusive,
            |x| DVec2::new(x, f(x)),
        );
        log::debug!("Funktion von x: {} Punkte", path.len());
        path
    }

    /// `x = f(y)` über `[bottom, top]`.
    pub fn function_of_y(&self, f: impl Fn(f64) -> f64) -> Path {
        let vp = self.viewport;
        let path = sample_axis(vp, vp.bottom(), vp.top(), self.y_policy, |y| {
            DVec2::new(f(y), y)
        });
        log::debug!("Funktion von y: {} Punkte", path.len());
        path
    }

    /// `(x(t), y(t))` für `t` von `t_start` bis `t_end`, inklusive des ersten Punkts hinter `t_end`.
    pub fn parametric(
        &self,
        x: impl Fn(f64) -> f64,
        y: impl Fn(f64) -> f64,
        t_start: f64,
        t_end: f64,
    ) -> Path {
        let path = sample_axis(
            self.viewport,
            t_start,
            t_end,
            BoundPolicy::TrailingInclusive,
            |t| DVec2::new(x(t), y(t)),
        );
        log::debug!(
            "Parametrische Kurve t ∈ [{}, {}]: {} Punkte",
            t_start,
            t_end,
            path.len()
        );
        path
    }
}

/// Gemeinsame Schleife: Startpunkt, dann `p = start + delta, p += delta` solange `policy` erlaubt.
fn sample_axis(
    viewport: &Viewport,
    start: f64,
    end: f64,
    policy: BoundPolicy,
    eval: impl Fn(f64) -> DVec2,
) -> Path {
    let delta = viewport.delta();
    let mut path = Path::with_capacity(reserved_capacity(end - start, delta, 2));

    path.push(viewport.to_device(eval(start)));
    let mut p = start + delta;
    while policy.admits(p, end, delta) {
        path.push(viewport.to_device(eval(p)));
        p += delta;
    }
    path
}
