use super::state::{wrap_angle, Phase};
use super::ArcTool;
use crate::app::tools::{DrawTool, ToolAction, ToolContext};
use crate::core::AnnotationKind;
use crate::shared::ChartOptions;
use approx::assert_relative_eq;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn ctx() -> ToolContext {
    ToolContext::new(&ChartOptions::default(), [1.0, 0.0, 0.0, 1.0])
}

fn on_circle(angle: f32) -> Vec2 {
    Vec2::from_angle(angle) * 100.0
}

/// Mitte bei (0,0), Radius 100, Start bei 0°.
fn tool_in_sweep_phase() -> ArcTool {
    let mut tool = ArcTool::new();
    tool.on_press(Vec2::ZERO, &ctx());
    tool.on_press(on_circle(0.0), &ctx());
    tool
}

#[test]
fn wrap_angle_stays_in_half_open_range() {
    assert_relative_eq!(wrap_angle(3.0 * PI), PI, epsilon = 1e-5);
    assert_relative_eq!(wrap_angle(-3.0 * FRAC_PI_2), FRAC_PI_2, epsilon = 1e-5);
    assert_relative_eq!(wrap_angle(0.25), 0.25);
}

#[test]
fn three_clicks_commit_quarter_arc() {
    let mut tool = tool_in_sweep_phase();
    tool.on_hover(on_circle(FRAC_PI_2 * 0.5));
    let action = tool.on_press(on_circle(FRAC_PI_2), &ctx());

    match action {
        ToolAction::Commit(AnnotationKind::Arc { shape, .. }) => {
            assert_relative_eq!(shape.radius, 100.0, epsilon = 1e-3);
            assert_relative_eq!(shape.start_angle, 0.0, epsilon = 1e-5);
            assert_relative_eq!(shape.sweep, FRAC_PI_2, epsilon = 1e-4);
        }
        other => panic!("Bogen erwartet, erhalten: {:?}", other),
    }
    assert!(!tool.has_pending_input());
}

#[test]
fn sweep_accumulates_beyond_half_turn() {
    let mut tool = tool_in_sweep_phase();
    for step in 1..=9 {
        tool.on_hover(on_circle(step as f32 * 0.1 * TAU));
    }
    let Phase::Sweep { shape, .. } = tool.phase else {
        panic!("Sweep-Phase erwartet");
    };
    assert_relative_eq!(shape.sweep, 0.9 * TAU, epsilon = 1e-3);
}

#[test]
fn sweep_runs_counter_clockwise_too() {
    let mut tool = tool_in_sweep_phase();
    tool.on_hover(on_circle(-0.5));
    tool.on_hover(on_circle(-1.0));
    let Phase::Sweep { shape, .. } = tool.phase else {
        panic!("Sweep-Phase erwartet");
    };
    assert_relative_eq!(shape.sweep, -1.0, epsilon = 1e-4);
}

#[test]
fn sweep_is_clamped_to_full_circle() {
    let mut tool = tool_in_sweep_phase();
    for step in 1..=30 {
        tool.on_hover(on_circle(step as f32 * 0.1 * TAU));
    }
    let Phase::Sweep { shape, .. } = tool.phase else {
        panic!("Sweep-Phase erwartet");
    };
    assert!(shape.sweep <= TAU + 1e-5);
}

#[test]
fn tiny_radius_click_is_ignored() {
    let mut tool = ArcTool::new();
    tool.on_press(Vec2::ZERO, &ctx());
    tool.on_press(Vec2::new(1.0, 0.0), &ctx());
    assert!(matches!(tool.phase, Phase::Radius { .. }));
}

#[test]
fn tiny_sweep_is_discarded() {
    let mut tool = tool_in_sweep_phase();
    let action = tool.on_press(on_circle(0.001), &ctx());
    assert_eq!(action, ToolAction::Continue);
    assert!(!tool.has_pending_input());
}

#[test]
fn reset_returns_to_center_phase() {
    let mut tool = tool_in_sweep_phase();
    tool.reset();
    assert!(matches!(tool.phase, Phase::Center));
    assert!(tool.preview(&ctx()).shapes.is_empty());
}
