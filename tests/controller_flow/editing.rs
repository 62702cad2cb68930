use super::{make_editor, send_all};
use glam::Vec2;
use neo_spline_editor::AppIntent;

#[test]
fn test_double_click_empty_space_adds_sorted_point() {
    let (mut controller, mut state) = make_editor();

    controller.handle_intent(
        &mut state,
        AppIntent::DoubleClicked {
            pos: Vec2::new(160.0, 100.0),
        },
    );

    let pts = state.model().control_points();
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[2].position, Vec2::new(160.0, 100.0));
    assert!(!pts[2].fixed);
    assert!(pts.windows(2).all(|w| w[0].x() <= w[1].x()));
    assert!(state.redraw_requested());
}

#[test]
fn test_add_then_remove_restores_default_points() {
    let (mut controller, mut state) = make_editor();
    let before = state.model().control_points().to_vec();
    let pos = Vec2::new(160.0, 100.0);

    send_all(
        &mut controller,
        &mut state,
        [
            AppIntent::DoubleClicked { pos },
            AppIntent::DoubleClicked { pos },
        ],
    );

    assert_eq!(state.model().control_points(), before.as_slice());
}

#[test]
fn test_double_click_fixed_point_is_noop() {
    let (mut controller, mut state) = make_editor();
    let before = state.model().control_points().to_vec();

    for fixed in [before[0].position, before[3].position] {
        controller.handle_intent(&mut state, AppIntent::DoubleClicked { pos: fixed });
    }

    assert_eq!(state.model().control_points(), before.as_slice());
}

#[test]
fn test_double_click_free_point_removes_it() {
    let (mut controller, mut state) = make_editor();
    let target = state.model().control_points()[1];

    controller.handle_intent(
        &mut state,
        AppIntent::DoubleClicked {
            pos: target.position + Vec2::new(4.0, 4.0),
        },
    );

    assert_eq!(state.model().len(), 3);
    assert!(state.model().point(target.id).is_none());
}

#[test]
fn test_endpoints_survive_any_editing() {
    let (mut controller, mut state) = make_editor();
    let first = state.model().control_points()[0];
    let last = state.model().control_points()[3];

    let clicks = [
        Vec2::new(40.0, 40.0),
        Vec2::new(280.0, 20.0),
        first.position,
        last.position,
        Vec2::new(40.0, 40.0),
    ];
    for pos in clicks {
        controller.handle_intent(&mut state, AppIntent::DoubleClicked { pos });
    }

    let pts = state.model().control_points();
    assert_eq!(pts.first().map(|p| p.id), Some(first.id));
    assert_eq!(pts.last().map(|p| p.id), Some(last.id));
    assert!(pts.first().unwrap().fixed && pts.last().unwrap().fixed);
}
