use serde::Serialize;

/// Margin used to decide whether a marker's position counts as matching the
/// overall fraction. Positions and fractions rarely compare exactly equal at
/// the "current" boundary once rounding is involved.
pub const CURRENT_TOLERANCE: f64 = 0.005;

/// Where a marker sits relative to the overall progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerPhase {
    Future,
    Current,
    Completed,
}

impl MarkerPhase {
    /// Classify a marker at normalized `position` against the overall
    /// `fraction`:
    ///
    /// - within [`CURRENT_TOLERANCE`] of the fraction → `Current`
    /// - strictly below it → `Completed`
    /// - otherwise → `Future`
    #[must_use]
    pub fn classify(position: f64, fraction: f64) -> Self {
        if (position - fraction).abs() <= CURRENT_TOLERANCE {
            MarkerPhase::Current
        } else if position < fraction {
            MarkerPhase::Completed
        } else {
            MarkerPhase::Future
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerPhase::Future => "future",
            MarkerPhase::Current => "current",
            MarkerPhase::Completed => "completed",
        }
    }
}

/// One of the `total_steps + 1` evenly spaced positions along the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub index: u32,
    pub position: f64,
    pub phase: MarkerPhase,
}

/// Derive the full marker row for a track of `total_steps` steps against an
/// overall `fraction`. Marker `i` sits at `i / total_steps`.
#[must_use]
pub fn markers(total_steps: u32, fraction: f64) -> Vec<Marker> {
    (0..=total_steps)
        .map(|index| {
            let position = f64::from(index) / f64::from(total_steps);
            Marker {
                index,
                position,
                phase: MarkerPhase::classify(position, fraction),
            }
        })
        .collect()
}
