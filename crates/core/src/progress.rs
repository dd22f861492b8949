use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("total steps must be > 0")]
    ZeroTotalSteps,

    #[error("current step {current_step} exceeds total steps {total_steps}")]
    StepOutOfRange {
        current_step: u32,
        total_steps: u32,
    },
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Position along a stepped track: how many of `total_steps` steps have been
/// taken.
///
/// The invariant `current_step <= total_steps` holds for every constructed
/// value; mutation happens only through the clamped transitions
/// [`advanced`](Progress::advanced) and [`retreated`](Progress::retreated),
/// so it cannot be violated afterwards.
///
/// # Examples
///
/// ```
/// # use stepper_core::progress::Progress;
/// let progress = Progress::new(5, 10)?;
/// assert_eq!(progress.fraction(), 0.5);
/// assert_eq!(progress.advanced().current_step(), 6);
/// # Ok::<(), stepper_core::progress::ProgressError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProgressDraft")]
pub struct Progress {
    current_step: u32,
    total_steps: u32,
}

/// Unvalidated mirror used during deserialization; the range check in
/// [`Progress::new`] runs before a value is produced.
#[derive(Debug, Deserialize)]
struct ProgressDraft {
    current_step: u32,
    total_steps: u32,
}

impl TryFrom<ProgressDraft> for Progress {
    type Error = ProgressError;

    fn try_from(draft: ProgressDraft) -> Result<Self, Self::Error> {
        Self::new(draft.current_step, draft.total_steps)
    }
}

impl Progress {
    /// Create a progress value, validating the step range.
    ///
    /// # Errors
    ///
    /// - `ZeroTotalSteps` if `total_steps == 0`
    /// - `StepOutOfRange` if `current_step > total_steps`
    pub fn new(current_step: u32, total_steps: u32) -> Result<Self, ProgressError> {
        if total_steps == 0 {
            return Err(ProgressError::ZeroTotalSteps);
        }
        if current_step > total_steps {
            return Err(ProgressError::StepOutOfRange {
                current_step,
                total_steps,
            });
        }

        Ok(Self {
            current_step,
            total_steps,
        })
    }

    /// Progress at step zero of the given track length.
    ///
    /// # Errors
    ///
    /// Returns `ZeroTotalSteps` if `total_steps == 0`.
    pub fn at_start(total_steps: u32) -> Result<Self, ProgressError> {
        Self::new(0, total_steps)
    }

    #[must_use]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Overall completion as a fraction in `[0, 1]`, recomputed on demand.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        f64::from(self.current_step) / f64::from(self.total_steps)
    }

    /// One step forward, clamped at `total_steps`.
    #[must_use]
    pub fn advanced(&self) -> Self {
        Self {
            current_step: self.current_step.saturating_add(1).min(self.total_steps),
            total_steps: self.total_steps,
        }
    }

    /// One step back, clamped at zero.
    #[must_use]
    pub fn retreated(&self) -> Self {
        Self {
            current_step: self.current_step.saturating_sub(1),
            total_steps: self.total_steps,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
