//! Zentrale Konfiguration für den Curve Plotter.
//!
//! `PlotterOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{BoundPolicy, NewtonMode, Viewport, ViewportError};
use crate::render::Color;

// ── Viewport ────────────────────────────────────────────────────────

/// Standard-Weltgrenzen (links, rechts, unten, oben).
pub const VIEWPORT_BOUNDS: [f64; 4] = [-4.0, 4.0, -4.0, 4.0];
/// Standard-Fenstergröße in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [800.0, 800.0];

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrund (RGBA: Weiß).
pub const BACKGROUND_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
/// Gitterlinien (RGBA: Hellgrau, rgb(200, 200, 200)).
pub const GRID_COLOR: Color = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
/// Achsen (RGBA: Schwarz).
pub const AXIS_COLOR: Color = [0.0, 0.0, 0.0, 1.0];

// ── Zeichnen ────────────────────────────────────────────────────────

/// Linienstärke der Kurven in Pixeln.
pub const STROKE_WIDTH: f32 = 1.0;
/// Radius gezeichneter Einzelpunkte in Pixeln.
pub const POINT_RADIUS: f64 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Plotter-Optionen.
/// Wird als `curve_plotter.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotterOptions {
    // ── Viewport ────────────────────────────────────────────────
    /// Weltgrenzen [links, rechts, unten, oben]
    pub viewport_bounds: [f64; 4],
    /// Anfangsgröße des Fensters in Pixeln
    pub window_size: [f32; 2],

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrundfarbe beim Löschen
    pub background_color: Color,
    /// Farbe der Gitterlinien
    pub grid_color: Color,
    /// Farbe der Achsen
    pub axis_color: Color,
    /// Gitter und Achsen zeichnen
    #[serde(default = "default_true")]
    pub show_grid: bool,

    // ── Zeichnen ────────────────────────────────────────────────
    /// Linienstärke in Pixeln
    pub stroke_width: f32,
    /// Radius von Einzelpunkten in Pixeln
    pub point_radius: f64,

    // ── Numerik ─────────────────────────────────────────────────
    /// Startpunkte pro Achse für implizite Kurven
    #[serde(default = "default_implicit_resolution")]
    pub implicit_resolution: usize,
    /// Newton-Schritte pro Startpunkt
    #[serde(default = "default_newton_iterations")]
    pub newton_iterations: usize,
    /// Funktionen von y wie Funktionen von x bis einen Schritt hinter `top` abtasten
    #[serde(default)]
    pub unified_bounds: bool,
    /// Nur endliche Abschnitte eines Pfads zeichnen
    #[serde(default)]
    pub skip_non_finite: bool,
    /// Newton-Modus (fest oder mit Konvergenz-Prüfung); als letztes Feld, da ggf. TOML-Tabelle
    #[serde(default)]
    pub newton_mode: NewtonMode,
}

impl Default for PlotterOptions {
    fn default() -> Self {
        Self {
            viewport_bounds: VIEWPORT_BOUNDS,
            window_size: WINDOW_SIZE,

            background_color: BACKGROUND_COLOR,
            grid_color: GRID_COLOR,
            axis_color: AXIS_COLOR,
            show_grid: true,

            stroke_width: STROKE_WIDTH,
            point_radius: POINT_RADIUS,

            implicit_resolution: crate::core::implicit::DEFAULT_RESOLUTION,
            newton_iterations: crate::core::implicit::DEFAULT_NEWTON_ITERATIONS,
            newton_mode: NewtonMode::Fixed,
            unified_bounds: false,
            skip_non_finite: false,
        }
    }
}

/// Serde-Default für `show_grid`.
fn default_true() -> bool {
    true
}

/// Serde-Default für `implicit_resolution` (Abwärtskompatibilität).
fn default_implicit_resolution() -> usize {
    crate::core::implicit::DEFAULT_RESOLUTION
}

/// Serde-Default für `newton_iterations` (Abwärtskompatibilität).
fn default_newton_iterations() -> usize {
    crate::core::implicit::DEFAULT_NEWTON_ITERATIONS
}

impl PlotterOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(self).context("Optionen konnten nicht serialisiert werden")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_plotter"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_plotter.toml")
    }

    /// Baut den Viewport aus den konfigurierten Weltgrenzen und einer Geräte-Größe.
    pub fn viewport(
        &self,
        device_width: f64,
        device_height: f64,
    ) -> Result<Viewport, ViewportError> {
        let [left, right, bottom, top] = self.viewport_bounds;
        Viewport::new(left, right, bottom, top, device_width, device_height)
    }

    /// Abbruchbedingung für Funktionen von y.
    pub fn y_bound_policy(&self) -> BoundPolicy {
        if self.unified_bounds {
            BoundPolicy::TrailingInclusive
        } else {
            BoundPolicy::Strict
        }
    }
}
