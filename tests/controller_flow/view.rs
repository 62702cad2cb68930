use super::make_editor;
use approx::assert_relative_eq;
use neo_spline_editor::{AppCommand, AppIntent, CurveColors, InterpolationMode};

#[test]
fn test_toggle_interpolation_keeps_control_points() {
    let (mut controller, mut state) = make_editor();
    let points_before = state.model().control_points().to_vec();
    let curve_before = controller.build_render_scene(&state).curve;

    controller.handle_intent(&mut state, AppIntent::InterpolationToggled);

    assert_eq!(state.interpolation, InterpolationMode::Linear);
    let scene = controller.build_render_scene(&state);
    assert_ne!(scene.curve, curve_before);
    assert_eq!(scene.control_points, points_before);
    assert_eq!(state.model().control_points(), points_before.as_slice());

    controller.handle_intent(&mut state, AppIntent::InterpolationToggled);
    assert_eq!(state.interpolation, InterpolationMode::CatmullRom);
    assert_eq!(controller.build_render_scene(&state).curve, curve_before);
}

#[test]
fn test_slider_sets_marker_on_linear_path() {
    let (mut controller, mut state) = make_editor();
    controller.handle_intent(
        &mut state,
        AppIntent::InterpolationModeChanged {
            mode: InterpolationMode::Linear,
        },
    );

    controller.handle_intent(
        &mut state,
        AppIntent::MarkerSliderChanged {
            value: 100.0,
            max: 100.0,
        },
    );

    assert_eq!(state.marker_position, Some(1.0));
    let marker = controller
        .build_render_scene(&state)
        .marker
        .expect("Marker erwartet");
    let last = state.model().control_points()[3].position;
    assert_relative_eq!(marker.x, last.x, epsilon = 1e-3);
    assert_relative_eq!(marker.y, last.y, epsilon = 1e-3);
}

#[test]
fn test_marker_on_curve_is_sample_at_index() {
    let (mut controller, mut state) = make_editor();
    controller.handle_intent(
        &mut state,
        AppIntent::MarkerPositionChanged { position: 0.5 },
    );

    let scene = controller.build_render_scene(&state);
    let index = (0.5 * (scene.curve.len() - 1) as f32).floor() as usize;
    assert_eq!(scene.marker, Some(scene.curve[index]));
}

#[test]
fn test_marker_is_not_stored_on_model() {
    let (mut controller, mut state) = make_editor();
    controller.handle_intent(
        &mut state,
        AppIntent::MarkerPositionChanged { position: 0.0 },
    );
    let before = controller.build_render_scene(&state).marker;

    // Marker folgt dem Modell, ohne neu gesetzt zu werden
    let first = state.model().control_points()[0];
    controller.handle_command(
        &mut state,
        AppCommand::MoveControlPoint {
            id: first.id,
            pos: glam::Vec2::new(0.0, 10.0),
        },
    );
    let after = controller.build_render_scene(&state).marker;

    assert_ne!(before, after);
    assert_eq!(after, Some(glam::Vec2::new(0.0, 10.0)));
}

#[test]
fn test_colors_changed_updates_scene() {
    let (mut controller, mut state) = make_editor();
    let colors = CurveColors {
        marker: [1.0, 0.0, 0.0, 1.0],
        ..CurveColors::default()
    };

    controller.handle_intent(&mut state, AppIntent::ColorsChanged { colors });

    assert_eq!(controller.build_render_scene(&state).colors, colors);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::SetColors { .. })
    ));
}
