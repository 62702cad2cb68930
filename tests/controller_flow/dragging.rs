use super::{make_editor, send_all};
use approx::assert_relative_eq;
use glam::Vec2;
use neo_spline_editor::{AppCommand, AppIntent};

#[test]
fn test_drag_moves_point_and_clamps_to_neighbour() {
    let (mut controller, mut state) = make_editor();
    let point = state.model().control_points()[1];
    assert_relative_eq!(point.x(), 106.666_67, epsilon = 1e-3);

    send_all(
        &mut controller,
        &mut state,
        [
            AppIntent::PointerPressed {
                pos: point.position,
            },
            AppIntent::PointerMoved {
                pos: Vec2::new(5.0, 80.0),
            },
        ],
    );

    assert_eq!(state.dragging, Some(point.id));
    let moved = state.model().point(point.id).expect("Punkt sollte existieren");
    assert_relative_eq!(moved.x(), 10.0);
    assert_relative_eq!(moved.y(), 80.0);

    controller.handle_intent(&mut state, AppIntent::PointerReleased);
    assert!(!state.is_dragging());
}

#[test]
fn test_drag_is_logged_as_single_move() {
    let (mut controller, mut state) = make_editor();
    let point = state.model().control_points()[2];

    send_all(
        &mut controller,
        &mut state,
        [
            AppIntent::PointerPressed {
                pos: point.position,
            },
            AppIntent::PointerMoved {
                pos: Vec2::new(190.0, 140.0),
            },
            AppIntent::PointerMoved {
                pos: Vec2::new(180.0, 130.0),
            },
            AppIntent::PointerMoved {
                pos: Vec2::new(170.0, 120.0),
            },
            AppIntent::PointerReleased,
        ],
    );

    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::BeginDrag { id: point.id },
            AppCommand::MoveControlPoint {
                id: point.id,
                pos: Vec2::new(170.0, 120.0),
            },
            AppCommand::EndDrag,
        ]
    );
}

#[test]
fn test_moves_after_release_are_ignored() {
    let (mut controller, mut state) = make_editor();
    let point = state.model().control_points()[2];

    send_all(
        &mut controller,
        &mut state,
        [
            AppIntent::PointerPressed {
                pos: point.position,
            },
            AppIntent::PointerReleased,
            AppIntent::PointerMoved {
                pos: Vec2::new(150.0, 20.0),
            },
        ],
    );

    assert_eq!(state.model().point(point.id), Some(&point));
}

#[test]
fn test_press_on_empty_space_stays_idle() {
    let (mut controller, mut state) = make_editor();
    let before = state.model().control_points().to_vec();

    send_all(
        &mut controller,
        &mut state,
        [
            AppIntent::PointerPressed {
                pos: Vec2::new(160.0, 190.0),
            },
            AppIntent::PointerMoved {
                pos: Vec2::new(100.0, 100.0),
            },
        ],
    );

    assert!(!state.is_dragging());
    assert_eq!(state.model().control_points(), before.as_slice());
}

#[test]
fn test_drag_fixed_endpoint_only_changes_y() {
    let (mut controller, mut state) = make_editor();
    let end = state.model().control_points()[3];

    send_all(
        &mut controller,
        &mut state,
        [
            AppIntent::PointerPressed { pos: end.position },
            AppIntent::PointerMoved {
                pos: Vec2::new(250.0, 30.0),
            },
            AppIntent::PointerReleased,
        ],
    );

    let moved = state.model().point(end.id).unwrap();
    assert_eq!(moved.position, Vec2::new(320.0, 30.0));
}

#[test]
fn test_double_click_cancels_drag() {
    let (mut controller, mut state) = make_editor();
    let point = state.model().control_points()[1];

    send_all(
        &mut controller,
        &mut state,
        [
            AppIntent::PointerPressed {
                pos: point.position,
            },
            AppIntent::DoubleClicked {
                pos: Vec2::new(160.0, 120.0),
            },
        ],
    );

    assert!(!state.is_dragging());
    assert_eq!(state.model().len(), 5);

    let commands = state.command_log.entries();
    let tail = &commands[commands.len() - 2..];
    assert_eq!(tail[0], AppCommand::EndDrag);
    assert_eq!(
        tail[1],
        AppCommand::AddControlPoint {
            pos: Vec2::new(160.0, 120.0)
        }
    );
}

#[test]
fn test_drag_of_removed_point_is_noop() {
    let (mut controller, mut state) = make_editor();
    let point = state.model().control_points()[2];

    controller.handle_intent(
        &mut state,
        AppIntent::PointerPressed {
            pos: point.position,
        },
    );
    // Entfernen läuft am Drag vorbei (z.B. direkter Command vom Host)
    controller.handle_command(&mut state, AppCommand::RemoveControlPoint { id: point.id });
    assert!(!state.is_dragging());

    let before = state.model().control_points().to_vec();
    controller.handle_command(
        &mut state,
        AppCommand::MoveControlPoint {
            id: point.id,
            pos: Vec2::new(200.0, 100.0),
        },
    );
    assert_eq!(state.model().control_points(), before.as_slice());
}

#[test]
fn test_redraw_requested_only_on_mutation() {
    let (mut controller, mut state) = make_editor();
    assert!(state.take_redraw_request(), "Erster Frame muss gezeichnet werden");
    assert!(!state.take_redraw_request());

    let point = state.model().control_points()[1];
    controller.handle_intent(
        &mut state,
        AppIntent::PointerPressed {
            pos: point.position,
        },
    );
    assert!(!state.take_redraw_request());

    controller.handle_intent(
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(120.0, 60.0),
        },
    );
    assert!(state.take_redraw_request());

    controller.handle_intent(&mut state, AppIntent::PointerReleased);
    assert!(!state.take_redraw_request());
}
