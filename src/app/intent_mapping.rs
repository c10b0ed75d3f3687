//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Die Übergangstabelle der Selektions-Zustandsmaschine:
//! Idle → Dragging(i) bei Primär-Press mit Hit, Dragging → Idle bei Release,
//! Drag mutiert nur im Dragging-Zustand, Move erzeugt reines Hover-Feedback.

use super::{AppCommand, AppIntent, AppState, PointerButton};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos, button } => {
            if button != PointerButton::Primary {
                // Nur die Primärtaste initiiert Selektion
                return Vec::new();
            }
            match state.curve.hit_test(pos, state.options.control_point_size) {
                Some(index) => vec![AppCommand::SelectControlPoint { index }],
                None => vec![AppCommand::ClearSelection],
            }
        }
        AppIntent::PointerReleased { button } => {
            if button != PointerButton::Primary {
                return Vec::new();
            }
            // Release hebt die Selektion immer auf, unabhängig von der Position
            vec![AppCommand::ClearSelection]
        }
        AppIntent::PointerDragged { pos } => {
            if state.selection.dragged_point.is_some() {
                vec![AppCommand::MoveSelectedPoint { pos }]
            } else {
                // Drag ohne Selektion: No-op
                Vec::new()
            }
        }
        AppIntent::PointerMoved { pos } => {
            let index = state.curve.hit_test(pos, state.options.control_point_size);
            vec![AppCommand::SetHoveredPoint { index }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
