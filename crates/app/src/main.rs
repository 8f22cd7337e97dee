use std::fmt;
use std::sync::Arc;

use deck_core::model::Deck;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Tymeless: Investor Pitch";
const DEFAULT_WIDTH: f64 = 1280.0;
const DEFAULT_HEIGHT: f64 = 800.0;
const DEFAULT_LOG_FILTER: &str = "warn,ui=info";
const LOG_ENV: &str = "PITCH_LOG";

#[derive(Debug, PartialEq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDimension { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDimension { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected a positive number)")
            }
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

fn parse_dimension(raw: String, flag: &'static str) -> Result<f64, ArgsError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ArgsError::InvalidDimension { flag, raw }),
    }
}

struct DesktopApp {
    deck: Arc<Deck>,
    title: String,
}

impl UiApp for DesktopApp {
    fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    fn window_title(&self) -> String {
        self.title.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- view    [--title <text>] [--width <px>] [--height <px>] [--log <filter>]"
    );
    eprintln!("  cargo run -p app -- outline");
    eprintln!();
    eprintln!("Defaults for view:");
    eprintln!("  --title \"{DEFAULT_TITLE}\"");
    eprintln!("  --width {DEFAULT_WIDTH}");
    eprintln!("  --height {DEFAULT_HEIGHT}");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PITCH_TITLE, PITCH_WIDTH, PITCH_HEIGHT, {LOG_ENV}");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    View,
    Outline,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "view" => Some(Self::View),
            "outline" => Some(Self::Outline),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
struct ViewArgs {
    title: String,
    width: f64,
    height: f64,
    log_filter: String,
}

#[derive(Debug, PartialEq)]
enum Invocation {
    View(ViewArgs),
    Outline,
    Help,
}

impl ViewArgs {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut title = env("PITCH_TITLE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut width = match env("PITCH_WIDTH") {
            Some(raw) => parse_dimension(raw, "PITCH_WIDTH")?,
            None => DEFAULT_WIDTH,
        };
        let mut height = match env("PITCH_HEIGHT") {
            Some(raw) => parse_dimension(raw, "PITCH_HEIGHT")?,
            None => DEFAULT_HEIGHT,
        };
        let mut log_filter = env(LOG_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--title" => title = require_value(args, "--title")?,
                "--width" => width = parse_dimension(require_value(args, "--width")?, "--width")?,
                "--height" => {
                    height = parse_dimension(require_value(args, "--height")?, "--height")?;
                }
                "--log" => log_filter = require_value(args, "--log")?,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            title,
            width,
            height,
            log_filter,
        }))
    }
}

fn parse_invocation(
    argv: Vec<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Invocation, ArgsError> {
    let mut iter = argv.into_iter().peekable();

    // No subcommand (or only flags) means `view`.
    let cmd = match iter.peek().map(String::as_str) {
        None => Command::View,
        Some("--help" | "-h") => return Ok(Invocation::Help),
        Some(first) if first.starts_with('-') => Command::View,
        Some(first) => {
            let cmd = Command::from_arg(first)
                .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
            iter.next();
            cmd
        }
    };

    match cmd {
        Command::View => Ok(ViewArgs::parse(&mut iter, env)?.map_or(Invocation::Help, Invocation::View)),
        Command::Outline => match iter.next() {
            None => Ok(Invocation::Outline),
            Some(flag) if flag == "--help" || flag == "-h" => Ok(Invocation::Help),
            Some(other) => Err(ArgsError::UnknownArg(other)),
        },
    }
}

/// Falls back to the default filter when `raw` does not parse.
fn build_log_filter(raw: &str) -> EnvFilter {
    EnvFilter::try_new(raw).unwrap_or_else(|err| {
        eprintln!("invalid log filter {raw:?}: {err}; using {DEFAULT_LOG_FILTER:?}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

fn init_logging(filter: &str) {
    // A second init (e.g. under a test runner) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(build_log_filter(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn outline_lines(deck: &Deck) -> Vec<String> {
    deck.iter()
        .map(|(index, kind)| format!("{:>2}  {:<15} {}", index.value(), kind.anchor(), kind.title()))
        .collect()
}

fn launch(args: ViewArgs) {
    init_logging(&args.log_filter);

    let deck = Arc::new(Deck::pitch());
    info!(
        slides = deck.len(),
        width = args.width,
        height = args.height,
        "launching pitch deck"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        deck,
        title: args.title.clone(),
    });
    let context = build_app_context(&app);

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_invocation(argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    match invocation {
        Invocation::Help => print_usage(),
        Invocation::Outline => {
            for line in outline_lines(&Deck::pitch()) {
                println!("{line}");
            }
        }
        Invocation::View(args) => launch(args),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
