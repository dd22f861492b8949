use stepper_core::{MotionConfig, StepperConfig};

use super::test_harness::{setup_bar_harness, setup_stepper_harness};

#[test]
fn stepper_view_smoke_renders_controls_and_bar() {
    let mut harness = setup_stepper_harness(StepperConfig::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("back"), "missing back control in {html}");
    assert!(html.contains("forward"), "missing forward control in {html}");
    assert!(html.contains("Step 5 of 10"), "missing caption in {html}");
    assert!(html.contains("width: 50%"), "missing fill width in {html}");
}

#[test]
fn stepper_view_renders_one_dot_per_boundary() {
    let mut harness = setup_stepper_harness(StepperConfig::default());
    harness.rebuild();
    let html = harness.render();

    assert_eq!(
        html.matches("step-dot").count(),
        11,
        "expected 11 dots in {html}"
    );
    // Exactly one dot carries the current color at 5/10.
    assert_eq!(
        html.matches("var(--brand-primary)").count(),
        1,
        "expected one current dot in {html}"
    );
}

#[test]
fn bar_renders_transition_shorthands() {
    let mut harness = setup_bar_harness(StepperConfig::default(), 0.5, 10, 5);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("transition: width 0.5s ease-in-out"),
        "missing fill transition in {html}"
    );
    assert!(
        html.contains("background-color 0.2s ease-in-out 0.2s"),
        "missing delayed current-dot transition in {html}"
    );
}

#[test]
fn bar_renders_nothing_for_negative_step() {
    let mut harness = setup_bar_harness(StepperConfig::default(), 0.5, 10, -1);
    harness.rebuild();
    let html = harness.render();

    assert!(!html.contains("step-dot"), "unexpected dots in {html}");
    assert!(!html.contains("progress-track"), "unexpected track in {html}");
}

#[test]
fn bar_surfaces_out_of_range_fraction() {
    let mut harness = setup_bar_harness(StepperConfig::default(), 1.5, 10, 5);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("fraction must be in [0, 1]"),
        "missing validation message in {html}"
    );
    assert!(!html.contains("step-dot"), "unexpected dots in {html}");
}

#[test]
fn stepper_view_honors_configured_track() {
    let config = StepperConfig::new(4, 0, MotionConfig::default()).unwrap();
    let mut harness = setup_stepper_harness(config);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Step 0 of 4"), "missing caption in {html}");
    assert_eq!(
        html.matches("step-dot").count(),
        5,
        "expected 5 dots in {html}"
    );
    assert!(html.contains("width: 0%"), "missing empty fill in {html}");
}
