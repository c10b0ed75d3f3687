//! Zentrale Konfiguration für den Bézier-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Kantenlänge der quadratischen Kontrollpunkt-Marker in Pixeln.
/// Definiert zugleich die Hitbox für den Hit-Test.
pub const CONTROL_POINT_SIZE: f32 = 8.0;

// ── Kurven-Abtastung ────────────────────────────────────────────────

/// Abtastschritte pro Bézier-Segment (t-Schrittweite 1/200 = 0.005).
/// Fester Qualitäts-/Performance-Kompromiss der Polyline-Approximation.
pub const CURVE_SAMPLES_PER_SEGMENT: usize = 200;

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des Kontrollpolygons (RGBA: Grün).
pub const POLYGON_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Farbe der Kurven-Polyline (RGBA: Schwarz).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Kontrollpunkt-Marker (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe für gezogene/gehoverte Marker (RGBA: Magenta).
pub const MARKER_COLOR_ACTIVE: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Marker-Kantenlänge in Pixeln (zugleich Hitbox-Größe)
    pub control_point_size: f32,
    /// Abtastschritte pro Segment für die Polyline-Approximation
    pub curve_samples_per_segment: usize,
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
    /// Farbe des Kontrollpolygons
    pub polygon_color: [f32; 4],
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Farbe der Kontrollpunkt-Marker
    pub marker_color: [f32; 4],
    /// Farbe für gezogene/gehoverte Marker
    #[serde(default = "default_marker_color_active")]
    pub marker_color_active: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            control_point_size: CONTROL_POINT_SIZE,
            curve_samples_per_segment: CURVE_SAMPLES_PER_SEGMENT,
            background_color: BACKGROUND_COLOR,
            polygon_color: POLYGON_COLOR,
            curve_color: CURVE_COLOR,
            marker_color: MARKER_COLOR,
            marker_color_active: MARKER_COLOR_ACTIVE,
        }
    }
}

/// Serde-Default für `marker_color_active` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_marker_color_active() -> [f32; 4] {
    MARKER_COLOR_ACTIVE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }
}
