mod components;
mod view;

pub use components::ProgressBar;
pub use view::StepperView;
