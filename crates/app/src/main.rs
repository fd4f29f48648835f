use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use services::{GameSettings, SettingsError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const ENV_STICKER_GOAL: &str = "LITTLE_LEARNER_STICKER_GOAL";
const ENV_SEED: &str = "LITTLE_LEARNER_SEED";

#[derive(Debug, Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid {flag} value: {raw}")]
    InvalidNumber { flag: &'static str, raw: String },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    settings: GameSettings,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> GameSettings {
        self.settings
    }
}

#[derive(Debug)]
struct Args {
    settings: GameSettings,
    log_level: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  little-learner [--sticker-goal <n>] [--advance-ms <ms>] [--flash-ms <ms>]");
    eprintln!("                 [--seed <u64>] [--log-level <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --sticker-goal 5");
    eprintln!("  --advance-ms 700");
    eprintln!("  --flash-ms 180");
    eprintln!("  --log-level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_STICKER_GOAL}, {ENV_SEED}, RUST_LOG");
}

impl Args {
    /// Flags win over environment variables, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut settings = GameSettings::default();
        let mut log_level = String::from("info");

        if let Some(raw) = env(ENV_STICKER_GOAL) {
            let goal = parse_number(ENV_STICKER_GOAL, raw)?;
            settings = settings.with_sticker_goal(goal)?;
        }
        if let Some(raw) = env(ENV_SEED) {
            settings = settings.with_seed(parse_number(ENV_SEED, raw)?);
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--sticker-goal" => {
                    let value = require_value(args, "--sticker-goal")?;
                    settings = settings.with_sticker_goal(parse_number("--sticker-goal", value)?)?;
                }
                "--advance-ms" => {
                    let value = require_value(args, "--advance-ms")?;
                    let millis = parse_number("--advance-ms", value)?;
                    settings = settings.with_advance_delay(Duration::from_millis(millis))?;
                }
                "--flash-ms" => {
                    let value = require_value(args, "--flash-ms")?;
                    let millis = parse_number("--flash-ms", value)?;
                    settings = settings.with_flash_delay(Duration::from_millis(millis))?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    settings = settings.with_seed(parse_number("--seed", value)?);
                }
                "--log-level" => {
                    log_level = require_value(args, "--log-level")?;
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            settings,
            log_level,
        })
    }
}

fn init_tracing(log_level: &str) {
    // RUST_LOG takes precedence over --log-level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }

    let parsed = Args::parse(&mut argv.into_iter(), |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing(&parsed.log_level);
    tracing::info!(
        sticker_goal = parsed.settings.sticker_goal().get(),
        advance_ms = parsed.settings.advance_delay().as_millis(),
        flash_ms = parsed.settings.flash_delay().as_millis(),
        seed = ?parsed.settings.seed(),
        "starting little-learner"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings: parsed.settings,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Little Learner")
            .with_inner_size(LogicalSize::new(960.0, 620.0))
            .with_min_inner_size(LogicalSize::new(800.0, 560.0))
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
