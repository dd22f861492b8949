mod progress_vm;

pub use progress_vm::{DotVm, ProgressBarVm, TRACK_HEIGHT_PX, dot_size_px, map_progress_bar};
