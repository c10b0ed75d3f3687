//! Handler für View-Zustand und Anwendungssteuerung.

use crate::app::AppState;

/// Übernimmt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Setzt den Hover-Zustand für das Cursor-Feedback.
pub fn set_hovered_point(state: &mut AppState, index: Option<usize>) {
    state.view.hovered_point = index;
}

/// Markiert die Anwendung zum kontrollierten Beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
