//! Zeichenfläche als schmale Schnittstelle plus aufzeichnende Implementierung.
//!
//! Der Kern erzeugt ausschließlich Geräte-Koordinaten und ruft nur die
//! primitiven Operationen dieses Traits auf.

use glam::DVec2;

/// RGBA-Farbe mit Komponenten in `0.0..=1.0`.
pub type Color = [f32; 4];

/// Primitive Zeichenoperationen einer 2D-Fläche (Geräte-Koordinaten).
pub trait DrawingSurface {
    /// Verwirft den aktuellen Pfad und beginnt einen neuen.
    fn begin_path(&mut self);
    /// Startet einen neuen Teilpfad bei `point`.
    fn move_to(&mut self, point: DVec2);
    /// Verlängert den aktuellen Teilpfad bis `point`.
    fn line_to(&mut self, point: DVec2);
    /// Schließt den aktuellen Teilpfad zurück zu seinem Startpunkt.
    fn close_path(&mut self);
    /// Zeichnet den aktuellen Pfad mit der Linienfarbe.
    fn stroke(&mut self);
    /// Gefüllter Kreis mit der Füllfarbe.
    fn fill_circle(&mut self, center: DVec2, radius: f64);
    /// Gefülltes Rechteck mit der Füllfarbe.
    fn fill_rect(&mut self, min: DVec2, max: DVec2);
    /// Setzt die Linienfarbe für folgende `stroke`-Aufrufe.
    fn set_stroke_color(&mut self, color: Color);
    /// Setzt die Füllfarbe für folgende Füll-Aufrufe.
    fn set_fill_color(&mut self, color: Color);
    /// Größe der Fläche in Pixeln.
    fn device_size(&self) -> DVec2;

    /// Füllt die gesamte Fläche mit `color`.
    fn clear(&mut self, color: Color) {
        self.set_fill_color(color);
        let size = self.device_size();
        self.fill_rect(DVec2::ZERO, size);
    }
}

/// Eine aufgezeichnete Zeichenoperation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    ClosePath,
    Stroke,
    FillCircle { center: DVec2, radius: f64 },
    FillRect { min: DVec2, max: DVec2 },
    SetStrokeColor(Color),
    SetFillColor(Color),
}

/// Zeichenfläche, die alle Aufrufe in Reihenfolge speichert.
///
/// Dient Tests und Benchmarks als Ersatz für ein echtes Fenster.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: DVec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Erstellt eine leere Aufzeichnung für eine Fläche der Größe `width`×`height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Alle aufgezeichneten Operationen.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Verwirft alle Aufzeichnungen.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Anzahl der `stroke`-Aufrufe.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }

    /// Punkte jedes gezeichneten Pfads (`move_to`/`line_to` seit `begin_path`), je `stroke`.
    pub fn stroked_paths(&self) -> Vec<Vec<DVec2>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        for command in &self.commands {
            match *command {
                DrawCommand::BeginPath => current.clear(),
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => current.push(p),
                DrawCommand::Stroke => paths.push(current.clone()),
                _ => {}
            }
        }
        paths
    }

    /// Mittelpunkte aller gefüllten Kreise.
    pub fn circle_centers(&self) -> Vec<DVec2> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FillCircle { center, .. } => Some(center),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: DVec2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: DVec2) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn fill_rect(&mut self, min: DVec2, max: DVec2) {
        self.commands.push(DrawCommand::FillRect { min, max });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn device_size(&self) -> DVec2 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_fills_whole_surface() {
        let mut surface = RecordingSurface::new(320.0, 200.0);
        surface.clear([1.0, 1.0, 1.0, 1.0]);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::SetFillColor([1.0, 1.0, 1.0, 1.0]),
                DrawCommand::FillRect {
                    min: DVec2::ZERO,
                    max: DVec2::new(320.0, 200.0)
                },
            ]
        );
    }

    #[test]
    fn test_stroked_paths_groups_points_per_stroke() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.begin_path();
        surface.move_to(DVec2::new(0.0, 0.0));
        surface.line_to(DVec2::new(1.0, 1.0));
        surface.stroke();
        surface.begin_path();
        surface.move_to(DVec2::new(5.0, 5.0));
        surface.line_to(DVec2::new(6.0, 5.0));
        surface.line_to(DVec2::new(7.0, 5.0));
        surface.stroke();

        let paths = surface.stroked_paths();
        assert_eq!(surface.stroke_count(), 2);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].len(), 2);
        assert_eq!(paths[1].len(), 3);
    }
}
