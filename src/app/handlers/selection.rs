//! Handler für Selektions- und Drag-Operationen.

use crate::app::AppState;
use glam::Vec2;

/// Selektiert einen Kontrollpunkt als Drag-Ziel.
///
/// Der Index stammt aus dem Hit-Test des Intent-Mappings; gegen die aktuelle
/// Kettenlänge wird trotzdem geprüft, damit ein veralteter Command den
/// Zustand nicht ungültig machen kann.
pub fn select_point(state: &mut AppState, index: usize) {
    if index < state.curve.point_count() {
        state.selection.dragged_point = Some(index);
    } else {
        log::warn!(
            "Selektion auf ungültigen Punktindex {index} ignoriert (nur {} Punkte)",
            state.curve.point_count()
        );
        state.selection.dragged_point = None;
    }
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    state.selection.dragged_point = None;
}

/// Setzt den gezogenen Punkt auf die neue Position.
/// No-op wenn kein Punkt gezogen wird.
pub fn move_selected(state: &mut AppState, pos: Vec2) {
    let Some(index) = state.selection.dragged_point else {
        return;
    };
    if !state.curve.set_point(index, pos) {
        log::warn!("Drag auf ungültigen Punktindex {index} ignoriert");
        state.selection.dragged_point = None;
    }
}
