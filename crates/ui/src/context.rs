use std::sync::Arc;

use stepper_core::StepperConfig;

pub trait UiApp: Send + Sync {
    fn stepper_config(&self) -> StepperConfig;
}

#[derive(Clone)]
pub struct AppContext {
    config: StepperConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: app.stepper_config(),
        }
    }

    #[must_use]
    pub fn config(&self) -> StepperConfig {
        self.config
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
