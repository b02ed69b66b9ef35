//! Fester 2D-Viewport: Welt-Bereich, Geräte-Größe und Welt→Geräte-Transformation.

use glam::DVec2;
use thiserror::Error;

/// Anzahl der Abtastschritte über die kürzere Welt-Seite.
pub const SAMPLING_RESOLUTION: f64 = 1000.0;

/// Fehler beim Erstellen eines Viewports.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ViewportError {
    /// `left < right` und `bottom < top` sind verletzt (auch bei NaN-Grenzen).
    #[error("ungültige Viewport-Grenzen: left={left}, right={right}, bottom={bottom}, top={top}")]
    InvalidBounds {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },
}

/// Unveränderlicher Viewport mit Welt-Grenzen und Geräte-Abmessungen in Pixeln.
///
/// Welt-Y wächst nach oben, Geräte-Y nach unten: `top` liegt auf Geräte-Zeile 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    device_width: f64,
    device_height: f64,
    delta: f64,
}

impl Viewport {
    /// Erstellt einen Viewport und leitet die Schrittweite `delta` ab.
    ///
    /// `delta = min(right - left, top - bottom) / 1000`, unabhängig von der Geräte-Größe.
    pub fn new(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        device_width: f64,
        device_height: f64,
    ) -> Result<Self, ViewportError> {
        // Negierte Vergleiche, damit NaN-Grenzen ebenfalls abgelehnt werden
        if !(left < right) || !(bottom < top) {
            return Err(ViewportError::InvalidBounds {
                left,
                right,
                bottom,
                top,
            });
        }

        let delta = (right - left).min(top - bottom) / SAMPLING_RESOLUTION;
        log::info!(
            "Viewport erstellt: x [{}, {}], y [{}, {}], Gerät {}x{}, delta={}",
            left,
            right,
            bottom,
            top,
            device_width,
            device_height,
            delta
        );

        Ok(Self {
            left,
            right,
            bottom,
            top,
            device_width,
            device_height,
            delta,
        })
    }

    /// Neuer Viewport mit gleichen Welt-Grenzen, aber anderer Geräte-Größe.
    pub fn with_device_size(&self, device_width: f64, device_height: f64) -> Self {
        Self {
            device_width,
            device_height,
            ..*self
        }
    }

    /// Konvertiert Welt-Koordinaten zu Geräte-Koordinaten (Y gespiegelt).
    pub fn to_device(&self, world: DVec2) -> DVec2 {
        DVec2::new(
            (world.x - self.left) * self.device_width / (self.right - self.left),
            (world.y - self.top) * self.device_height / (self.bottom - self.top),
        )
    }

    /// Linke Welt-Grenze
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Rechte Welt-Grenze
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Untere Welt-Grenze
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Obere Welt-Grenze
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Geräte-Breite in Pixeln
    pub fn device_width(&self) -> f64 {
        self.device_width
    }

    /// Geräte-Höhe in Pixeln
    pub fn device_height(&self) -> f64 {
        self.device_height
    }

    /// Geräte-Größe als Vektor (Breite, Höhe).
    pub fn device_size(&self) -> DVec2 {
        DVec2::new(self.device_width, self.device_height)
    }

    /// Abtast-Schrittweite in Welteinheiten.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Breite des Welt-Bereichs.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Höhe des Welt-Bereichs.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}
