use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use stepper_core::StepperConfig;

use crate::context::{UiApp, build_app_context};
use crate::views::{ProgressBar, StepperView};

#[derive(Clone)]
struct TestApp {
    config: StepperConfig,
}

impl UiApp for TestApp {
    fn stepper_config(&self) -> StepperConfig {
        self.config
    }
}

#[derive(Props, Clone)]
struct StepperHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for StepperHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StepperHarnessProps {}

#[component]
fn StepperHarness(props: StepperHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { StepperView {} }
}

#[derive(Props, Clone)]
struct BarHarnessProps {
    app: Arc<TestApp>,
    fraction: f64,
    total_steps: u32,
    current_step: i64,
}

impl PartialEq for BarHarnessProps {
    fn eq(&self, other: &Self) -> bool {
        self.fraction == other.fraction
            && self.total_steps == other.total_steps
            && self.current_step == other.current_step
    }
}

#[component]
fn BarHarness(props: BarHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! {
        ProgressBar {
            fraction: props.fraction,
            total_steps: props.total_steps,
            current_step: props.current_step,
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_stepper_harness(config: StepperConfig) -> ViewHarness {
    let app = Arc::new(TestApp { config });
    let dom = VirtualDom::new_with_props(StepperHarness, StepperHarnessProps { app });
    ViewHarness { dom }
}

pub fn setup_bar_harness(
    config: StepperConfig,
    fraction: f64,
    total_steps: u32,
    current_step: i64,
) -> ViewHarness {
    let app = Arc::new(TestApp { config });
    let dom = VirtualDom::new_with_props(
        BarHarness,
        BarHarnessProps {
            app,
            fraction,
            total_steps,
            current_step,
        },
    );
    ViewHarness { dom }
}
