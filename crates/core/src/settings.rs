use serde::{Deserialize, Serialize};

use crate::motion::MotionConfig;
use crate::progress::{Progress, ProgressError};

/// Configuration for the stepper page: track length, where the counter
/// starts, and how transitions are timed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StepperConfigDraft")]
pub struct StepperConfig {
    total_steps: u32,
    initial_step: u32,
    motion: MotionConfig,
}

/// Unvalidated mirror used during deserialization; the range check in
/// [`StepperConfig::new`] runs before a value is produced.
#[derive(Debug, Deserialize)]
struct StepperConfigDraft {
    total_steps: u32,
    initial_step: u32,
    motion: MotionConfig,
}

impl TryFrom<StepperConfigDraft> for StepperConfig {
    type Error = ProgressError;

    fn try_from(draft: StepperConfigDraft) -> Result<Self, Self::Error> {
        Self::new(draft.total_steps, draft.initial_step, draft.motion)
    }
}

impl StepperConfig {
    pub const DEFAULT_TOTAL_STEPS: u32 = 10;
    pub const DEFAULT_INITIAL_STEP: u32 = 5;

    /// Validate and assemble a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` when `total_steps` is zero or `initial_step`
    /// lies beyond it.
    pub fn new(
        total_steps: u32,
        initial_step: u32,
        motion: MotionConfig,
    ) -> Result<Self, ProgressError> {
        // Reuse the Progress invariant instead of restating the range check.
        Progress::new(initial_step, total_steps)?;

        Ok(Self {
            total_steps,
            initial_step,
            motion,
        })
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    #[must_use]
    pub fn initial_step(&self) -> u32 {
        self.initial_step
    }

    #[must_use]
    pub fn motion(&self) -> MotionConfig {
        self.motion
    }

    /// The progress value the page's counter starts from.
    ///
    /// # Panics
    ///
    /// Cannot panic: the step range was validated at construction.
    #[must_use]
    pub fn initial_progress(&self) -> Progress {
        Progress::new(self.initial_step, self.total_steps)
            .expect("step range validated at construction")
    }
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            total_steps: Self::DEFAULT_TOTAL_STEPS,
            initial_step: Self::DEFAULT_INITIAL_STEP,
            motion: MotionConfig::default(),
        }
    }
}
