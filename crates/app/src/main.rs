use std::fmt;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use syntax_core::share::ShareLink;
use ui::{App, AppContext, LaunchPage};

const DEFAULT_SHARE_URL: &str = "https://compilers-course.github.io/syntax-lab";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidShareUrl { raw: String },
    InvalidPage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidShareUrl { raw } => write!(f, "invalid --share-url value: {raw}"),
            ArgsError::InvalidPage { raw } => write!(f, "invalid --page value: {raw}"),
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

struct Args {
    share_link: ShareLink,
    page: LaunchPage,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--share-url <url>] [--page <name>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --share-url {DEFAULT_SHARE_URL}");
    eprintln!("  --page home        (home | grammar | trees | ambiguity)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SYNTAX_LAB_SHARE_URL, SYNTAX_LAB_PAGE");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut share_raw = std::env::var("SYNTAX_LAB_SHARE_URL")
            .ok()
            .unwrap_or_else(|| DEFAULT_SHARE_URL.to_string());
        let mut page = std::env::var("SYNTAX_LAB_PAGE")
            .ok()
            .and_then(|value| value.parse::<LaunchPage>().ok())
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--share-url" => {
                    let value = require_value(args, "--share-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidShareUrl { raw: value });
                    }
                    share_raw = value;
                }
                "--page" => {
                    let value = require_value(args, "--page")?;
                    page = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidPage { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let share_link = ShareLink::parse(&share_raw)
            .map_err(|_| ArgsError::InvalidShareUrl { raw: share_raw })?;

        Ok(Self { share_link, page })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    log::info!(
        "starting with share url {} on page {:?}",
        parsed.share_link,
        parsed.page
    );

    let context = AppContext::new(parsed.share_link, parsed.page);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Syntax Lab")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
