//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Kontrollpunkte: {} | Segmente: {}",
                state.point_count(),
                state.segment_count()
            ));

            ui.separator();

            match state.selection.dragged_point {
                Some(index) => {
                    let pos = state.curve.point(index).unwrap_or_default();
                    ui.label(format!(
                        "Ziehe Punkt {} ({:.0}, {:.0})",
                        index, pos.x, pos.y
                    ));
                }
                None => {
                    ui.label("Kein Punkt ausgewählt. Marker mit der linken Maustaste ziehen");
                }
            }
        });
    });
}
