use stepper_core::{Fraction, MarkerPhase, MotionConfig, markers};

/// Track height in pixels; the fill overlay shares it.
pub const TRACK_HEIGHT_PX: f64 = 8.0;
/// Dots are scaled up from the track height so they overhang it.
const DOT_SCALE: f64 = 1.75;

#[must_use]
pub fn dot_size_px() -> f64 {
    TRACK_HEIGHT_PX * DOT_SCALE
}

const DOT_COMPLETED: &str = "var(--brand-accent)";
const DOT_CURRENT: &str = "var(--brand-primary)";
const DOT_FUTURE: &str = "var(--gray-300)";

/// Render-ready values for one dot: everything the component needs is a
/// string or a constant, so this maps straight into inline styles.
#[derive(Debug, Clone, PartialEq)]
pub struct DotVm {
    pub index: u32,
    pub left: String,
    pub color: &'static str,
    pub transition: String,
    pub phase: MarkerPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarVm {
    pub fill_width: String,
    pub fill_transition: String,
    pub dots: Vec<DotVm>,
}

/// Map a validated fraction and track length to the bar's render model.
#[must_use]
pub fn map_progress_bar(
    fraction: Fraction,
    total_steps: u32,
    motion: &MotionConfig,
) -> ProgressBarVm {
    let dots = markers(total_steps, fraction.value())
        .into_iter()
        .map(|marker| {
            let is_current = marker.phase == MarkerPhase::Current;
            DotVm {
                index: marker.index,
                left: percent(marker.position),
                color: dot_color(marker.phase),
                transition: motion.dot_transition(is_current),
                phase: marker.phase,
            }
        })
        .collect();

    ProgressBarVm {
        fill_width: percent(fraction.value()),
        fill_transition: motion.fill_transition(),
        dots,
    }
}

fn dot_color(phase: MarkerPhase) -> &'static str {
    match phase {
        MarkerPhase::Completed => DOT_COMPLETED,
        MarkerPhase::Current => DOT_CURRENT,
        MarkerPhase::Future => DOT_FUTURE,
    }
}

fn percent(fraction: f64) -> String {
    format!("{}%", fraction * 100.0)
}
