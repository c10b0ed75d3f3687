//! Viewport-Input-Handling: Maus-Events und Cursor-Feedback → AppIntent.

use crate::app::{AppIntent, PointerButton};
use glam::Vec2;

/// Sammelt pro Frame die Pointer-Intents des Viewports.
///
/// Hält selbst keinen Zustand — ob ein Drag läuft, entscheidet der
/// Controller anhand der Selektion im AppState.
#[derive(Default)]
pub struct InputState;

impl InputState {
    /// Erstellt einen neuen Input-Sammler.
    pub fn new() -> Self {
        Self
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// `hovered_point` ist der Hover-Zustand des letzten Frames und steuert
    /// das Greif-Cursor-Feedback.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        hovered_point: Option<usize>,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::ExitRequested);
        }

        let origin = response.rect.min;

        for egui_button in [
            egui::PointerButton::Primary,
            egui::PointerButton::Secondary,
            egui::PointerButton::Middle,
        ] {
            let Some(button) = map_button(egui_button) else {
                continue;
            };

            if response.hovered() && ui.input(|i| i.pointer.button_pressed(egui_button)) {
                // press_origin() liefert die exakte Klickposition (vor der
                // Drag-Schwelle); interact_pointer_pos() wäre um einige Pixel
                // versetzt und würde asymmetrische Hitboxen erzeugen.
                let press_pos = ui.input(|i| i.pointer.press_origin());
                if let Some(pos) = press_pos {
                    events.push(AppIntent::PointerPressed {
                        pos: to_canvas(pos, origin),
                        button,
                    });
                }
            }

            if ui.input(|i| i.pointer.button_released(egui_button)) {
                events.push(AppIntent::PointerReleased { button });
            }
        }

        if ui.input(|i| i.pointer.is_moving()) {
            if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
                let pos = to_canvas(pos, origin);
                if ui.input(|i| i.pointer.primary_down()) {
                    events.push(AppIntent::PointerDragged { pos });
                } else if response.hovered() {
                    events.push(AppIntent::PointerMoved { pos });
                }
            }
        }

        // Cursor-Feedback nur solange der Zeiger über der Zeichenfläche ist,
        // sonst bleibt der Greif-Cursor außerhalb (z.B. Status-Bar) hängen
        if response.hovered() {
            ui.ctx().set_cursor_icon(cursor_for(hovered_point));
        }

        events
    }
}

/// Wählt das Cursor-Symbol für den aktuellen Hover-Zustand:
/// Greifhand über einem greifbaren Kontrollpunkt, sonst Standard.
fn cursor_for(hovered_point: Option<usize>) -> egui::CursorIcon {
    if hovered_point.is_some() {
        egui::CursorIcon::Grab
    } else {
        egui::CursorIcon::Default
    }
}

/// Übersetzt egui-Tasten in das toolkit-neutrale Event-Vokabular.
/// Extra-Tasten (Vor/Zurück) werden ignoriert.
fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

fn to_canvas(pos: egui::Pos2, origin: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x - origin.x, pos.y - origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_reflects_hover_state() {
        assert_eq!(cursor_for(Some(0)), egui::CursorIcon::Grab);
        assert_eq!(cursor_for(None), egui::CursorIcon::Default);
    }

    #[test]
    fn test_to_canvas_shifts_by_origin() {
        let pos = egui::pos2(120.0, 80.0);
        let origin = egui::pos2(20.0, 30.0);
        assert_eq!(to_canvas(pos, origin), Vec2::new(100.0, 50.0));
    }
}
