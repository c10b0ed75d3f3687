//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Szene ist ein reiner Schnappschuss: Rendern mutiert den Zustand nie.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        points: state.curve.points().to_vec(),
        selected_point: state.selection.dragged_point,
        hovered_point: state.view.hovered_point,
        viewport_size,
        options: state.options.clone(),
    }
}
