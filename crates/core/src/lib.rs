pub mod error;
pub mod fraction;
pub mod marker;
pub mod motion;
pub mod progress;
pub mod settings;

pub use error::Error;
pub use fraction::{Fraction, FractionError};
pub use marker::{CURRENT_TOLERANCE, Marker, MarkerPhase, markers};
pub use motion::{Easing, MotionConfig};
pub use progress::{Progress, ProgressError};
pub use settings::StepperConfig;
