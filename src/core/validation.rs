//! Optionale Prüfung von Aufrufer-Funktionen auf nicht-endliche Werte.
//!
//! Der Kern selbst prüft nie; wer Artefakte erkennen will, wickelt seine
//! Funktionen in einen [`FiniteCheck`] und fragt danach den Zähler ab.

use std::cell::Cell;

/// Zählt nicht-endliche Rückgabewerte der umwickelten Funktionen.
///
/// Die Werte selbst werden unverändert durchgereicht.
#[derive(Debug)]
pub struct FiniteCheck {
    label: &'static str,
    evaluations: Cell<u64>,
    non_finite: Cell<u64>,
}

impl FiniteCheck {
    /// Erstellt einen Zähler; `label` erscheint in der Log-Ausgabe.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            evaluations: Cell::new(0),
            non_finite: Cell::new(0),
        }
    }

    fn record(&self, value: f64) -> f64 {
        self.evaluations.set(self.evaluations.get() + 1);
        if !value.is_finite() {
            self.non_finite.set(self.non_finite.get() + 1);
        }
        value
    }

    /// Umwickelt eine Funktion eines Parameters (x, y oder t).
    pub fn curve<'a>(&'a self, f: impl Fn(f64) -> f64 + 'a) -> impl Fn(f64) -> f64 + 'a {
        move |p| self.record(f(p))
    }

    /// Umwickelt ein Skalarfeld `(x, y)`.
    pub fn field<'a>(&'a self, f: impl Fn(f64, f64) -> f64 + 'a) -> impl Fn(f64, f64) -> f64 + 'a {
        move |x, y| self.record(f(x, y))
    }

    /// Umwickelt ein Krümmungsfeld `(x, y, s)`.
    pub fn curvature<'a>(
        &'a self,
        f: impl Fn(f64, f64, f64) -> f64 + 'a,
    ) -> impl Fn(f64, f64, f64) -> f64 + 'a {
        move |x, y, s| self.record(f(x, y, s))
    }

    /// Anzahl aller Auswertungen.
    pub fn evaluations(&self) -> u64 {
        self.evaluations.get()
    }

    /// Anzahl der NaN-/Unendlich-Ergebnisse.
    pub fn non_finite(&self) -> u64 {
        self.non_finite.get()
    }

    /// Gibt `true` zurück, wenn bisher nur endliche Werte geliefert wurden.
    pub fn is_clean(&self) -> bool {
        self.non_finite.get() == 0
    }

    /// Schreibt eine Warnung, falls nicht-endliche Werte aufgetreten sind, und setzt zurück.
    pub fn report(&self) -> u64 {
        let non_finite = self.non_finite.replace(0);
        let evaluations = self.evaluations.replace(0);
        if non_finite > 0 {
            log::warn!(
                "{}: {} von {} Auswertungen nicht endlich",
                self.label,
                non_finite,
                evaluations
            );
        }
        non_finite
    }
}
