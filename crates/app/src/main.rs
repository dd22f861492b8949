use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use stepper_core::{MotionConfig, ProgressError, StepperConfig};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTotalSteps { raw: String },
    InvalidStep { raw: String },
    InvalidConfig(ProgressError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTotalSteps { raw } => {
                write!(f, "invalid --total-steps value: {raw}")
            }
            ArgsError::InvalidStep { raw } => write!(f, "invalid --step value: {raw}"),
            ArgsError::InvalidConfig(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    config: StepperConfig,
}

impl UiApp for DesktopApp {
    fn stepper_config(&self) -> StepperConfig {
        self.config
    }
}

struct Args {
    total_steps: u32,
    initial_step: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--total-steps <n>] [--step <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --total-steps 10");
    eprintln!("  --step 5");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STEPPER_TOTAL_STEPS, STEPPER_STEP");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut total_steps = std::env::var("STEPPER_TOTAL_STEPS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(StepperConfig::DEFAULT_TOTAL_STEPS);
        let mut initial_step = std::env::var("STEPPER_STEP")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(StepperConfig::DEFAULT_INITIAL_STEP);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--total-steps" => {
                    let value = require_value(args, "--total-steps")?;
                    total_steps = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTotalSteps { raw: value.clone() })?;
                }
                "--step" => {
                    let value = require_value(args, "--step")?;
                    initial_step = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidStep { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            total_steps,
            initial_step,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let parsed = Args::parse(&mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Validate the step range once, here at the boundary; views past this
    // point only ever see a well-formed config.
    let config = StepperConfig::new(
        parsed.total_steps,
        parsed.initial_step,
        MotionConfig::default(),
    )
    .map_err(ArgsError::InvalidConfig)?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { config });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Stepper")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
