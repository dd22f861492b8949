mod stepper;

pub use stepper::{ProgressBar, StepperView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
