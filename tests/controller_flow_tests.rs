//! Integrationstests: kompletter Intent→Command→State-Fluss durch den Controller.

use bezier_curve_editor::{AppCommand, AppController, AppIntent, AppState, PointerButton};
use glam::Vec2;

fn press(pos: Vec2) -> AppIntent {
    AppIntent::PointerPressed {
        pos,
        button: PointerButton::Primary,
    }
}

fn release() -> AppIntent {
    AppIntent::PointerReleased {
        button: PointerButton::Primary,
    }
}

fn drag(pos: Vec2) -> AppIntent {
    AppIntent::PointerDragged { pos }
}

#[test]
fn test_press_on_marker_selects_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, press(Vec2::new(50.0, 100.0)))
        .expect("Press sollte ohne Fehler durchlaufen");

    assert_eq!(state.selection.dragged_point, Some(0));

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::SelectControlPoint { index } => assert_eq!(*index, 0),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_press_on_empty_area_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.selection.dragged_point = Some(2);

    controller
        .handle_intent(&mut state, press(Vec2::new(200.0, 200.0)))
        .expect("Press ins Leere sollte robust sein");

    assert_eq!(state.selection.dragged_point, None);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::ClearSelection => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_secondary_button_never_initiates_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(50.0, 100.0),
                button: PointerButton::Secondary,
            },
        )
        .expect("Sekundär-Press sollte ignoriert werden");

    assert_eq!(state.selection.dragged_point, None);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_drag_moves_selected_point_exactly() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, press(Vec2::new(50.0, 100.0)))
        .expect("Press sollte funktionieren");
    controller
        .handle_intent(&mut state, drag(Vec2::new(60.0, 110.0)))
        .expect("Drag sollte funktionieren");

    assert_eq!(state.curve.point(0), Some(Vec2::new(60.0, 110.0)));
    assert_eq!(state.selection.dragged_point, Some(0));
}

#[test]
fn test_drag_without_selection_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, drag(Vec2::new(70.0, 120.0)))
        .expect("Drag ohne Selektion sollte robust sein");

    // Kein Punkt verändert, kein Command ausgeführt
    assert_eq!(state.curve.point(0), Some(Vec2::new(50.0, 100.0)));
    assert!(state.command_log.is_empty());
}

#[test]
fn test_release_always_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Release ohne vorherigen Press
    controller
        .handle_intent(&mut state, release())
        .expect("Release ohne Press sollte robust sein");
    assert_eq!(state.selection.dragged_point, None);

    // Release nach Press
    controller
        .handle_intent(&mut state, press(Vec2::new(50.0, 100.0)))
        .expect("Press sollte funktionieren");
    assert_eq!(state.selection.dragged_point, Some(0));

    controller
        .handle_intent(&mut state, release())
        .expect("Release sollte funktionieren");
    assert_eq!(state.selection.dragged_point, None);
}

#[test]
fn test_full_drag_scenario_on_default_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Hit-Tests auf der Standard-Kurve
    assert_eq!(
        state.curve.hit_test(Vec2::new(50.0, 100.0), state.options.control_point_size),
        Some(0)
    );
    assert_eq!(
        state.curve.hit_test(Vec2::new(200.0, 200.0), state.options.control_point_size),
        None
    );

    // Press auf Punkt 0, Drag nach (60, 110)
    controller
        .handle_intent(&mut state, press(Vec2::new(50.0, 100.0)))
        .expect("Press sollte funktionieren");
    controller
        .handle_intent(&mut state, drag(Vec2::new(60.0, 110.0)))
        .expect("Drag sollte funktionieren");
    assert_eq!(state.curve.point(0), Some(Vec2::new(60.0, 110.0)));

    // Release beendet den Drag
    controller
        .handle_intent(&mut state, release())
        .expect("Release sollte funktionieren");
    assert_eq!(state.selection.dragged_point, None);

    // Nachfolgender Drag lässt Punkt 0 unverändert
    controller
        .handle_intent(&mut state, drag(Vec2::new(70.0, 120.0)))
        .expect("Drag nach Release sollte No-op sein");
    assert_eq!(state.curve.point(0), Some(Vec2::new(60.0, 110.0)));
}

#[test]
fn test_pointer_move_updates_hover_feedback() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(150.0, 50.0),
            },
        )
        .expect("Move sollte funktionieren");
    assert_eq!(state.view.hovered_point, Some(1));

    // Hover ist reines UI-Feedback: keine Selektion, keine Mutation
    assert_eq!(state.selection.dragged_point, None);
    assert_eq!(state.curve.point(1), Some(Vec2::new(150.0, 50.0)));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(200.0, 200.0),
            },
        )
        .expect("Move ins Leere sollte funktionieren");
    assert_eq!(state.view.hovered_point, None);
}

#[test]
fn test_viewport_resize_is_tracked() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1024.0, 768.0],
            },
        )
        .expect("Resize sollte funktionieren");

    assert_eq!(state.view.viewport_size, [1024.0, 768.0]);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_render_scene_reflects_drag_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, press(Vec2::new(50.0, 100.0)))
        .expect("Press sollte funktionieren");
    controller
        .handle_intent(&mut state, drag(Vec2::new(80.0, 90.0)))
        .expect("Drag sollte funktionieren");

    let scene = controller.build_render_scene(&state, [800.0, 600.0]);
    assert_eq!(scene.points[0], Vec2::new(80.0, 90.0));
    assert_eq!(scene.selected_point, Some(0));
}

#[test]
fn test_larger_hitbox_from_options_is_respected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.control_point_size = 16.0;

    // (56, 100) liegt außerhalb der 8er-Box, aber innerhalb der 16er-Box
    controller
        .handle_intent(&mut state, press(Vec2::new(56.0, 100.0)))
        .expect("Press sollte funktionieren");

    assert_eq!(state.selection.dragged_point, Some(0));
}
