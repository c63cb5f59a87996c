use super::*;

use tug_ui_graphics::Brush;

const MS: u64 = 1_000_000;

fn indicator() -> PullIndicator {
    PullIndicator::new(IndicatorStyle::default(), 1.0)
}

#[test]
fn starts_hidden_in_filling_phase() {
    let ind = indicator();
    assert!(!ind.is_visible());
    assert_eq!(ind.phase(), IndicatorPhase::Filling);
    assert_eq!(ind.filling_sweep_deg(), FILLING_REST_ANGLE_DEG);
}

#[test]
fn half_progress_yields_half_sweep() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(0.5);
    assert_eq!(ind.phase(), IndicatorPhase::Filling);
    assert_eq!(ind.filling_sweep_deg(), 180.0);
}

#[test]
fn full_progress_enters_looping_and_spins() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(1.0);
    assert_eq!(ind.phase(), IndicatorPhase::Looping);

    // First frame anchors the spin clock; 400ms is half a revolution.
    ind.frame(0);
    assert_eq!(ind.looping_angle_deg(), 0.0);
    ind.frame(400 * MS);
    assert!((ind.looping_angle_deg() - 180.0).abs() < 0.01);
    // A full period wraps around.
    ind.frame(800 * MS);
    assert!(ind.looping_angle_deg().abs() < 0.01);
}

#[test]
fn progress_above_one_is_clamped() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(2.5);
    assert_eq!(ind.progress(), 1.0);
    assert_eq!(ind.phase(), IndicatorPhase::Looping);
}

#[test]
fn reset_returns_to_filling_rest_angle() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(1.0);
    ind.frame(100 * MS);
    ind.reset_state();
    assert_eq!(ind.phase(), IndicatorPhase::Filling);
    assert_eq!(ind.progress(), 0.0);
    assert_eq!(ind.filling_sweep_deg(), FILLING_REST_ANGLE_DEG);
}

#[test]
fn pop_scale_rises_to_peak_then_settles() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(1.0);

    ind.frame(0);
    assert_eq!(ind.scale(), 1.0);
    ind.frame(100 * MS);
    assert!((ind.scale() - POP_MAX_SCALE).abs() < 1e-4);
    ind.frame(200 * MS);
    assert_eq!(ind.scale(), 1.0);
    // Pop is one-shot; later frames stay at rest scale.
    ind.frame(300 * MS);
    assert_eq!(ind.scale(), 1.0);
}

#[test]
fn repeated_full_progress_does_not_rearm_pop() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(1.0);
    ind.frame(0);
    ind.frame(250 * MS); // pop finished
    ind.set_progress(1.0);
    ind.frame(300 * MS);
    assert_eq!(ind.scale(), 1.0);
}

#[test]
fn filling_frame_draws_base_circle_and_fill_arc() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(0.25);
    let frame = ind.frame(0);

    assert_eq!(frame.commands.len(), 2);
    let base = &frame.commands[0];
    assert_eq!(base.sweep_angle_deg, 360.0);
    assert!(matches!(base.brush, Brush::Solid(_)));
    let fill = &frame.commands[1];
    assert_eq!(fill.start_angle_deg, FILLING_REST_ANGLE_DEG);
    assert_eq!(fill.sweep_angle_deg, 90.0);
    // 33dp ring inset by 1dp of padding at density 1.
    assert_eq!(fill.bounds.x, 1.0);
    assert_eq!(fill.bounds.width, 31.0);
}

#[test]
fn looping_frame_rotates_a_sweep_gradient() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(1.0);
    ind.frame(0);
    let frame = ind.frame(200 * MS);

    let arc = &frame.commands[1];
    assert!(matches!(arc.brush, Brush::SweepGradient { .. }));
    assert_eq!(arc.sweep_angle_deg, 360.0);
    assert!((arc.rotation_deg - 90.0).abs() < 0.01);
    assert_eq!(arc.start_angle_deg, -arc.rotation_deg);
}

#[test]
fn hidden_indicator_emits_empty_frame() {
    let mut ind = indicator();
    ind.set_progress(0.5);
    let frame = ind.frame(0);
    assert!(frame.commands.is_empty());
    assert_eq!(frame.scale, 1.0);
}

#[test]
fn looping_self_schedules_redraws() {
    let mut ind = indicator();
    ind.set_visible(true);
    ind.set_progress(0.5);
    assert!(ind.needs_redraw());
    ind.frame(0);
    // Filling frames are driven by progress changes only.
    assert!(!ind.needs_redraw());

    ind.set_progress(1.0);
    ind.frame(16 * MS);
    // Looping requests the next frame from every draw.
    assert!(ind.needs_redraw());
}
