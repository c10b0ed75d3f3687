//! Übersetzt eine `RenderScene` in Zeichenbefehle auf einer `DrawSurface`.

use super::surface::DrawSurface;
use crate::core::{bezier, curve_chain};
use crate::shared::RenderScene;

/// Zeichnet die komplette Szene: Hintergrund, pro Segment Kontrollpolygon
/// und Kurven-Polyline, danach die Marker aller Kontrollpunkte.
///
/// Reine Funktion der Szene — mutiert nichts außer der Zeichenfläche.
/// Bei weniger als 4 Punkten wird kein Segment gezeichnet.
pub fn draw(scene: &RenderScene, surface: &mut dyn DrawSurface) {
    let opts = &scene.options;

    surface.fill_background(opts.background_color);

    for segment in curve_chain::segments(&scene.points) {
        // Kontrollpolygon: gerade Verbindungen der vier Kontrollpunkte
        for pair in segment.windows(2) {
            surface.line(pair[0], pair[1], opts.polygon_color);
        }

        // Kurve als Polyline über de-Casteljau-Abtastung
        let polyline = bezier::sample_segment(segment, opts.curve_samples_per_segment);
        for pair in polyline.windows(2) {
            surface.line(pair[0], pair[1], opts.curve_color);
        }
    }

    for (index, point) in scene.points.iter().enumerate() {
        let active = scene.selected_point == Some(index) || scene.hovered_point == Some(index);
        let color = if active {
            opts.marker_color_active
        } else {
            opts.marker_color
        };
        surface.rect_stroked(*point, opts.control_point_size, color);
    }
}
