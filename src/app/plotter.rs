//! Zeichen-API über einer Fläche und einem Viewport.
//!
//! Bündelt die Kern-Komponenten, sodass Aufrufer nur Welt-Koordinaten und
//! Funktionen übergeben; alle Geräte-Koordinaten entstehen hier.

use glam::DVec2;

use super::scene::Scene;
use crate::core::{CurvaturePathIntegrator, CurveSampler, ImplicitLocusFinder, Path, Viewport};
use crate::render::{Color, DrawingSurface};
use crate::shared::PlotterOptions;

/// Zeichnet Kurven, Hilfslinien und Punkte auf eine Fläche.
pub struct Plotter<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
    viewport: &'a Viewport,
    options: &'a PlotterOptions,
}

impl<'a, S: DrawingSurface + ?Sized> Plotter<'a, S> {
    /// Erstellt einen Plotter für einen Frame.
    pub fn new(surface: &'a mut S, viewport: &'a Viewport, options: &'a PlotterOptions) -> Self {
        Self {
            surface,
            viewport,
            options,
        }
    }

    /// Der verwendete Viewport.
    pub fn viewport(&self) -> &Viewport {
        self.viewport
    }

    /// Setzt die Linienfarbe für folgende Kurven und Linien.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.surface.set_stroke_color(color);
    }

    /// Setzt die Füllfarbe für folgende Punkte.
    pub fn set_fill_color(&mut self, color: Color) {
        self.surface.set_fill_color(color);
    }

    /// Füllt die Fläche mit der Hintergrundfarbe.
    pub fn clear(&mut self) {
        self.surface.clear(self.options.background_color);
    }

    /// Senkrechte Linie über die volle Höhe bei Welt-x.
    pub fn vertical_line(&mut self, x: f64) {
        let device_x = self.viewport.to_device(DVec2::new(x, self.viewport.top())).x;
        let height = self.viewport.device_height();
        self.line(DVec2::new(device_x, 0.0), DVec2::new(device_x, height));
    }

    /// Waagerechte Linie über die volle Breite bei Welt-y.
    pub fn horizontal_line(&mut self, y: f64) {
        let device_y = self.viewport.to_device(DVec2::new(self.viewport.left(), y)).y;
        let width = self.viewport.device_width();
        self.line(DVec2::new(0.0, device_y), DVec2::new(width, device_y));
    }

    fn line(&mut self, from: DVec2, to: DVec2) {
        self.surface.begin_path();
        self.surface.move_to(from);
        self.surface.line_to(to);
        self.surface.close_path();
        self.surface.stroke();
    }

    /// Gefüllter Punkt bei Welt-Position `position` mit `radius` Pixeln.
    pub fn plot_point(&mut self, position: DVec2, radius: f64) {
        self.surface.fill_circle(self.viewport.to_device(position), radius);
    }

    /// Gitter an jeder ganzzahligen Koordinate, danach die Achsen.
    pub fn draw_grid(&mut self) {
        let vp = self.viewport;

        self.surface.set_stroke_color(self.options.grid_color);
        let mut x = vp.left().floor();
        while x < vp.right() {
            if x != 0.0 {
                self.vertical_line(x);
            }
            x += 1.0;
        }
        let mut y = vp.bottom().floor();
        while y < vp.top() {
            self.horizontal_line(y);
            y += 1.0;
        }

        self.surface.set_stroke_color(self.options.axis_color);
        self.vertical_line(0.0);
        self.horizontal_line(0.0);
    }

    /// Zeichnet `y = f(x)` über die ganze Breite.
    pub fn function_of_x(&mut self, f: impl Fn(f64) -> f64) {
        let path = CurveSampler::new(self.viewport).function_of_x(f);
        self.stroke_path(&path);
    }

    /// Zeichnet `x = f(y)` über die ganze Höhe.
    pub fn function_of_y(&mut self, f: impl Fn(f64) -> f64) {
        let path = CurveSampler::new(self.viewport)
            .with_y_policy(self.options.y_bound_policy())
            .function_of_y(f);
        self.stroke_path(&path);
    }

    /// Zeichnet `(x(t), y(t))` für `t ∈ [t_start, t_end]`.
    pub fn parametric(
        &mut self,
        x: impl Fn(f64) -> f64,
        y: impl Fn(f64) -> f64,
        t_start: f64,
        t_end: f64,
    ) {
        let path = CurveSampler::new(self.viewport).parametric(x, y, t_start, t_end);
        self.stroke_path(&path);
    }

    /// Zeichnet die Kurve mit Krümmung `curvature(x, y, s)` ab `start` in Richtung `theta`.
    pub fn anti_curvature(
        &mut self,
        curvature: impl Fn(f64, f64, f64) -> f64,
        start: DVec2,
        theta: f64,
        total_arclength: f64,
    ) {
        let path = CurvaturePathIntegrator::new(self.viewport).integrate(
            curvature,
            start,
            theta,
            total_arclength,
        );
        self.stroke_path(&path);
    }

    /// Zeichnet die Punktwolke von `field(x, y) = 0`.
    pub fn implicit(&mut self, field: impl Fn(f64, f64) -> f64) {
        let points = self.locus_finder().locate(field);
        self.plot_points(&points);
    }

    /// Zeichnet die Punktwolke von `f(x, y) = g(x, y)`.
    pub fn equivalence(&mut self, f: impl Fn(f64, f64) -> f64, g: impl Fn(f64, f64) -> f64) {
        let points = self.locus_finder().locate_equivalence(f, g);
        self.plot_points(&points);
    }

    /// Löscht die Fläche, zeichnet Gitter (falls aktiv) und alle Elemente der Szene.
    pub fn draw_scene(&mut self, scene: &Scene) {
        self.clear();
        if self.options.show_grid {
            self.draw_grid();
        }
        for item in scene.items() {
            item.draw(self);
        }
        log::trace!("Szene mit {} Elementen gezeichnet", scene.len());
    }

    fn locus_finder(&self) -> ImplicitLocusFinder<'a> {
        ImplicitLocusFinder::new(self.viewport)
            .with_resolution(self.options.implicit_resolution)
            .with_iterations(self.options.newton_iterations)
            .with_mode(self.options.newton_mode)
    }

    fn plot_points(&mut self, points: &[DVec2]) {
        for &point in points {
            self.plot_point(point, self.options.point_radius);
        }
    }

    fn stroke_path(&mut self, path: &Path) {
        if self.options.skip_non_finite {
            path.draw_finite(&mut *self.surface);
        } else {
            path.draw(&mut *self.surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};
    use approx::assert_relative_eq;

    fn setup() -> (RecordingSurface, Viewport, PlotterOptions) {
        let options = PlotterOptions::default();
        let viewport = options.viewport(800.0, 800.0).unwrap();
        (RecordingSurface::new(800.0, 800.0), viewport, options)
    }

    #[test]
    fn test_vertical_line_spans_full_height() {
        let (mut surface, viewport, options) = setup();
        Plotter::new(&mut surface, &viewport, &options).vertical_line(1.0);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(DVec2::new(500.0, 0.0)),
                DrawCommand::LineTo(DVec2::new(500.0, 800.0)),
                DrawCommand::ClosePath,
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_horizontal_line_uses_flipped_y() {
        let (mut surface, viewport, options) = setup();
        Plotter::new(&mut surface, &viewport, &options).horizontal_line(2.0);
        let paths = surface.stroked_paths();
        assert_relative_eq!(paths[0][0].y, 200.0);
        assert_relative_eq!(paths[0][1].x, 800.0);
    }

    #[test]
    fn test_grid_draws_integer_lines_and_axes() {
        let (mut surface, viewport, options) = setup();
        Plotter::new(&mut surface, &viewport, &options).draw_grid();
        // x: -4..3 ohne 0 → 7, y: -4..3 → 8, Achsen → 2
        assert_eq!(surface.stroke_count(), 17);
        assert!(surface
            .commands()
            .contains(&DrawCommand::SetStrokeColor(options.axis_color)));
    }

    #[test]
    fn test_plotter_exposes_its_viewport() {
        let (mut surface, viewport, options) = setup();
        let plotter = Plotter::new(&mut surface, &viewport, &options);
        assert_eq!(plotter.viewport(), &viewport);
        assert_relative_eq!(plotter.viewport().delta(), 0.008);
    }

    #[test]
    fn test_plot_point_uses_device_coordinates() {
        let (mut surface, viewport, options) = setup();
        Plotter::new(&mut surface, &viewport, &options).plot_point(DVec2::new(-4.0, 4.0), 3.0);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillCircle {
                center: DVec2::ZERO,
                radius: 3.0
            }]
        );
    }

    #[test]
    fn test_skip_non_finite_splits_stroke() {
        let (mut surface, viewport, mut options) = setup();
        options.skip_non_finite = true;
        Plotter::new(&mut surface, &viewport, &options).function_of_x(|x| 1.0 / x.round());

        let commands = surface.commands();
        assert!(commands.iter().all(|c| match c {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => p.is_finite(),
            _ => true,
        }));
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn test_equivalence_plots_configured_seed_count() {
        let (mut surface, viewport, mut options) = setup();
        options.implicit_resolution = 7;
        Plotter::new(&mut surface, &viewport, &options)
            .equivalence(|x, y| x * x + y * y, |_, _| 4.0);
        assert_eq!(surface.circle_centers().len(), 49);
    }
}
