//! Zeichenfläche über einem `egui::Painter`.

use glam::DVec2;

use super::surface::{Color, DrawingSurface};

/// Konvertiert eine RGBA-Farbe (`0.0..=1.0`) nach `egui::Color32`.
pub fn to_color32(color: Color) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

/// Zeichnet in ein Rechteck eines egui-Painters; Geräte-Ursprung ist `rect.min`.
///
/// Nicht-endliche Punkte können nicht tesselliert werden und unterbrechen
/// den aktuellen Teilpfad.
pub struct EguiSurface<'p> {
    painter: &'p egui::Painter,
    rect: egui::Rect,
    stroke_width: f32,
    stroke_color: egui::Color32,
    fill_color: egui::Color32,
    subpaths: Vec<Vec<egui::Pos2>>,
}

impl<'p> EguiSurface<'p> {
    /// Erstellt eine Fläche über `rect` mit der gegebenen Linienstärke in Pixeln.
    pub fn new(painter: &'p egui::Painter, rect: egui::Rect, stroke_width: f32) -> Self {
        Self {
            painter,
            rect,
            stroke_width,
            stroke_color: egui::Color32::BLACK,
            fill_color: egui::Color32::BLACK,
            subpaths: Vec::new(),
        }
    }

    /// Geräte-Punkt in Bildschirm-Koordinaten; `None`, wenn er als `f32` nicht endlich ist.
    fn to_screen(&self, point: DVec2) -> Option<egui::Pos2> {
        let pos = egui::pos2(
            self.rect.min.x + point.x as f32,
            self.rect.min.y + point.y as f32,
        );
        (pos.x.is_finite() && pos.y.is_finite()).then_some(pos)
    }
}

impl DrawingSurface for EguiSurface<'_> {
    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, point: DVec2) {
        let start = self.to_screen(point).into_iter().collect();
        self.subpaths.push(start);
    }

    fn line_to(&mut self, point: DVec2) {
        match (self.to_screen(point), self.subpaths.last_mut()) {
            (Some(pos), Some(current)) => current.push(pos),
            (Some(pos), None) => self.subpaths.push(vec![pos]),
            // Lücke: folgende Punkte beginnen einen neuen Teilpfad
            (None, _) => self.subpaths.push(Vec::new()),
        }
    }

    fn close_path(&mut self) {
        if let Some(current) = self.subpaths.last_mut() {
            if current.len() >= 2 {
                current.push(current[0]);
            }
        }
    }

    fn stroke(&mut self) {
        let stroke = egui::Stroke::new(self.stroke_width, self.stroke_color);
        for subpath in self.subpaths.iter().filter(|s| s.len() >= 2) {
            self.painter.add(egui::Shape::line(subpath.clone(), stroke));
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        if let Some(pos) = self.to_screen(center) {
            self.painter.circle_filled(pos, radius as f32, self.fill_color);
        }
    }

    fn fill_rect(&mut self, min: DVec2, max: DVec2) {
        if let (Some(a), Some(b)) = (self.to_screen(min), self.to_screen(max)) {
            self.painter.rect_filled(egui::Rect::from_two_pos(a, b), 0.0, self.fill_color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = to_color32(color);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = to_color32(color);
    }

    fn device_size(&self) -> DVec2 {
        DVec2::new(self.rect.width() as f64, self.rect.height() as f64)
    }
}
