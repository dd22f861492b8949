use dioxus::prelude::*;

use crate::context::AppContext;

use super::components::ProgressBar;

/// Host page: owns the step counter and forwards the derived fraction to
/// the presentational bar.
#[component]
pub fn StepperView() -> Element {
    let ctx = use_context::<AppContext>();
    let config = ctx.config();
    let mut progress = use_signal(move || config.initial_progress());

    let current = progress();

    rsx! {
        div { class: "page stepper-page",
            header { class: "view-header",
                h2 { class: "view-title", "Progress" }
                p { class: "view-subtitle", "Step {current.current_step()} of {current.total_steps()}" }
            }
            div { class: "view-divider" }
            div { class: "stepper-controls",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| progress.set(progress().retreated()),
                    "back"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| progress.set(progress().advanced()),
                    "forward"
                }
            }
            div { class: "stepper-band",
                ProgressBar {
                    fraction: current.fraction(),
                    total_steps: current.total_steps(),
                    current_step: i64::from(current.current_step()),
                }
            }
        }
    }
}
