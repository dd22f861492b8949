use dioxus::prelude::*;
use stepper_core::Fraction;

use crate::context::AppContext;
use crate::vm::{DotVm, TRACK_HEIGHT_PX, dot_size_px, map_progress_bar};

/// Presentational bar: a fixed-height track, an animated fill overlay, and
/// one dot per step boundary. Output is fully determined by the three
/// inputs; a negative `current_step` renders nothing.
#[component]
pub fn ProgressBar(fraction: f64, total_steps: u32, current_step: i64) -> Element {
    let ctx = use_context::<AppContext>();

    if current_step < 0 {
        return rsx! {};
    }

    // Validate the raw fraction once, here at the component boundary, and
    // surface a readable failure instead of a malformed render.
    let fraction = match Fraction::parse(fraction) {
        Ok(fraction) => fraction,
        Err(err) => {
            return rsx! {
                p { class: "progress-error", "{err}" }
            };
        }
    };

    let motion = ctx.config().motion();
    let vm = map_progress_bar(fraction, total_steps, &motion);

    let track_style = format!(
        "height: {TRACK_HEIGHT_PX}px; margin-top: {}px;",
        dot_size_px()
    );
    let fill_style = format!(
        "width: {}; transition: {}; border-radius: 0 {radius}px {radius}px 0;",
        vm.fill_width,
        vm.fill_transition,
        radius = TRACK_HEIGHT_PX / 2.0
    );
    let dots = vm.dots.iter().cloned().map(|dot| {
        rsx! {
            StepDot { key: "{dot.index}", dot }
        }
    });

    rsx! {
        div { class: "progress-track", style: "{track_style}",
            div { class: "progress-fill", style: "{fill_style}" }
            {dots}
        }
    }
}

#[component]
fn StepDot(dot: DotVm) -> Element {
    let size = dot_size_px();
    let style = format!(
        "left: {}; height: {size}px; width: {size}px; background-color: {}; transition: {};",
        dot.left, dot.color, dot.transition
    );

    rsx! {
        div { class: "step-dot", style: "{style}" }
    }
}
