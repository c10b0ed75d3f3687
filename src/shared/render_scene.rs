//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
///
/// Die Punktliste ist eine Kopie der Kontrollpunkte des aktuellen Frames —
/// es entkommen keine Referenzen auf den mutierbaren App-Zustand.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Sequenz-Reihenfolge
    pub points: Vec<Vec2>,
    /// Index des aktuell gezogenen Punkts
    pub selected_point: Option<usize>,
    /// Index des Punkts unter dem Cursor (Hover-Feedback)
    pub hovered_point: Option<usize>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}
