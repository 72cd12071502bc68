use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use services::{Deck, DeckService};
use ui::{App, UiApp, build_app_context};

const FILE_ENV: &str = "FLASHQUIZ_FILE";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingPath { command: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingPath { command } => write!(f, "{command} requires a document path"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
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

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Ui { file: Option<PathBuf> },
    Cards { path: PathBuf, json: bool },
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  flashquiz ui    [--file <path>]");
    eprintln!("  flashquiz cards <path> [--json]");
    eprintln!();
    eprintln!("With no subcommand the desktop app is launched.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {FILE_ENV}   document to preload in the desktop app");
    eprintln!("  RUST_LOG         log filter (e.g. info, services=debug)");
}

/// Parse everything after the binary name. `env_file` is the value of `FLASHQUIZ_FILE`.
fn parse_args(argv: Vec<String>, env_file: Option<String>) -> Result<Command, ArgsError> {
    let mut args = argv.into_iter().peekable();

    let subcommand = match args.peek().map(String::as_str) {
        None => "ui".to_string(),
        Some(first) if first.starts_with("--") && first != "--help" => "ui".to_string(),
        Some(_) => args.next().unwrap_or_default(),
    };

    match subcommand.as_str() {
        "--help" | "-h" | "help" => Ok(Command::Help),
        "ui" => {
            let mut file = env_file.filter(|v| !v.trim().is_empty()).map(PathBuf::from);
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--file" => file = Some(PathBuf::from(require_value(&mut args, "--file")?)),
                    "--help" | "-h" => return Ok(Command::Help),
                    _ => return Err(ArgsError::UnknownArg(arg)),
                }
            }
            Ok(Command::Ui { file })
        }
        "cards" => {
            let mut path = None;
            let mut json = false;
            for arg in args {
                match arg.as_str() {
                    "--json" => json = true,
                    "--help" | "-h" => return Ok(Command::Help),
                    _ if arg.starts_with("--") || path.is_some() => {
                        return Err(ArgsError::UnknownArg(arg));
                    }
                    _ => path = Some(PathBuf::from(arg)),
                }
            }
            let path = path.ok_or(ArgsError::MissingPath { command: "cards" })?;
            Ok(Command::Cards { path, json })
        }
        other => Err(ArgsError::UnknownCommand(other.to_string())),
    }
}

struct DesktopApp {
    deck_service: Arc<DeckService>,
    initial_file: Option<PathBuf>,
}

impl UiApp for DesktopApp {
    fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    fn initial_file(&self) -> Option<PathBuf> {
        self.initial_file.clone()
    }
}

fn print_deck(deck: &Deck, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&deck.cards()[..])?);
        return Ok(());
    }
    println!("{} flashcards from {}", deck.len(), deck.source());
    for card in deck.cards().iter() {
        println!();
        println!("{}. {}", card.id(), card.question());
        println!("   {}", card.answer());
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(argv, std::env::var(FILE_ENV).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let deck_service = Arc::new(DeckService::default());

    match command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Cards { path, json } => {
            let deck = deck_service.build_from_path(&path)?;
            print_deck(&deck, json)
        }
        Command::Ui { file } => {
            info!("launching desktop app (preload: {file:?})");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                deck_service,
                initial_file: file,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("PDF Flashcard Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
