//! Polyline in Geräte-Koordinaten: ein zusammenhängender Zeichenstrich.

use glam::DVec2;

use crate::render::DrawingSurface;

/// Geordnete Geräte-Punkte eines Strichs.
///
/// Lebenszyklus: aufbauen, einmal auf eine Fläche zeichnen, verwerfen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<DVec2>,
}

impl Path {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Erstellt einen leeren Pfad mit reservierter Kapazität.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Hängt einen Geräte-Punkt an.
    pub fn push(&mut self, point: DVec2) {
        self.points.push(point);
    }

    /// Alle Punkte in Zeichenreihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn der Pfad keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Erster Punkt (Startpunkt des Strichs).
    pub fn first(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    /// Letzter Punkt.
    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    /// Zusammenhängende Abschnitte, deren Punkte alle endlich sind.
    ///
    /// Nicht-endliche Punkte trennen die Abschnitte und fallen selbst weg.
    pub fn finite_runs(&self) -> Vec<&[DVec2]> {
        self.points
            .split(|p| !p.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// Zeichnet den Pfad als einen Strich: `begin_path → move_to → line_to… → stroke`.
    ///
    /// Nicht-endliche Punkte werden unverändert weitergereicht.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };
        surface.begin_path();
        surface.move_to(*first);
        for &point in rest {
            surface.line_to(point);
        }
        surface.stroke();
    }

    /// Zeichnet nur die endlichen Abschnitte, je Abschnitt ein eigener Teilpfad.
    pub fn draw_finite<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let runs = self.finite_runs();
        if runs.is_empty() {
            return;
        }
        surface.begin_path();
        for run in runs {
            surface.move_to(run[0]);
            for &point in &run[1..] {
                surface.line_to(point);
            }
        }
        surface.stroke();
    }
}

impl FromIterator<DVec2> for Path {
    fn from_iter<T: IntoIterator<Item = DVec2>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<DVec2> for Path {
    fn extend<T: IntoIterator<Item = DVec2>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn test_draw_issues_single_stroke() {
        let path: Path = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)]
            .into_iter()
            .collect();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        path.draw(&mut surface);

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(DVec2::new(0.0, 0.0)),
                DrawCommand::LineTo(DVec2::new(1.0, 2.0)),
                DrawCommand::LineTo(DVec2::new(3.0, 4.0)),
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_empty_path_draws_nothing() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        Path::new().draw(&mut surface);
        Path::new().draw_finite(&mut surface);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_finite_runs_split_at_nan() {
        let path: Path = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(f64::NAN, 2.0),
            DVec2::new(3.0, f64::INFINITY),
            DVec2::new(4.0, 4.0),
        ]
        .into_iter()
        .collect();

        let runs = path.finite_runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1], &[DVec2::new(4.0, 4.0)]);
    }

    #[test]
    fn test_draw_finite_starts_subpath_per_run() {
        let path: Path = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(f64::NAN, f64::NAN),
            DVec2::new(2.0, 2.0),
            DVec2::new(3.0, 3.0),
        ]
        .into_iter()
        .collect();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        path.draw_finite(&mut surface);

        let moves = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
        assert_eq!(surface.stroke_count(), 1);
    }
}
