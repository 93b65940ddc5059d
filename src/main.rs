//! Blok - command-line message lookup
//!
//! Entry point for the `blok` binary. Handles CLI argument parsing,
//! logging initialization, and resolves one message from a catalog.

use anyhow::{anyhow, Context, Result};
use blok::i18n::Replacements;
use blok::{Blok, Config};
use std::path::PathBuf;

/// Application name for logging
const APP_NAME: &str = "blok";

/// Parsed command line
#[derive(Debug, Default)]
struct Flags {
    key: Option<String>,
    catalog: Option<PathBuf>,
    config: Option<PathBuf>,
    locale: Option<String>,
    count: Option<i64>,
    data: Replacements,
    show_missing: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    let flags = parse_args();

    let config = match &flags.config {
        Some(path) => Config::load_from(path)
            .map_err(|err| anyhow!(err.user_message()))
            .with_context(|| format!("Could not use configuration {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("{}", err.user_message());
            Config::default()
        }),
    };

    let mut blok = Blok::install(config)
        .map_err(|err| anyhow!(err.user_message()))
        .context("Invalid configuration")?;

    if let Some(path) = &flags.catalog {
        blok.load_catalog(path)
            .map_err(|err| anyhow!(err.user_message()))?;
    }

    let Some(key) = flags.key.as_deref() else {
        eprintln!("Error: a message KEY is required");
        eprintln!("Use --help for usage information");
        std::process::exit(1);
    };

    let data = (!flags.data.is_empty()).then_some(&flags.data);
    let locale = flags.locale.as_deref();

    blok.trace(format_args!(
        "Resolving '{}' in locale '{}'",
        key,
        locale.unwrap_or(blok.translator().locale())
    ));

    let output = match flags.count {
        Some(count) => blok.choice(key, count, data, locale),
        None => blok.trans(key, data, locale),
    };
    println!("{}", output);

    if flags.show_missing {
        for missing in blok.translator().missing_keys() {
            eprintln!("missing: {}", missing);
        }
    }

    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,blok=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Parse command line arguments
fn parse_args() -> Flags {
    let args: Vec<String> = std::env::args().collect();
    let mut flags = Flags::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-m" | "--missing" => flags.show_missing = true,
            option @ ("-c" | "--catalog" | "-C" | "--config" | "-l" | "--locale" | "-n"
            | "--count" | "-d" | "--data") => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} requires an argument", option);
                    std::process::exit(1);
                };
                apply_option(&mut flags, option, value);
                i += 1;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
            key => {
                if flags.key.is_some() {
                    eprintln!("Error: only one KEY may be given");
                    std::process::exit(1);
                }
                flags.key = Some(key.to_string());
            }
        }
        i += 1;
    }

    flags
}

/// Store the value of an option that takes an argument
fn apply_option(flags: &mut Flags, option: &str, value: &str) {
    match option {
        "-c" | "--catalog" => flags.catalog = Some(PathBuf::from(value)),
        "-C" | "--config" => flags.config = Some(PathBuf::from(value)),
        "-l" | "--locale" => flags.locale = Some(value.to_string()),
        "-n" | "--count" => match value.parse::<i64>() {
            Ok(count) => flags.count = Some(count),
            Err(_) => {
                eprintln!("Error: --count expects an integer, got '{}'", value);
                std::process::exit(1);
            }
        },
        "-d" | "--data" => match value.split_once('=') {
            Some((name, replacement)) => flags.data.insert(name, replacement),
            None => {
                eprintln!("Error: --data expects NAME=VALUE, got '{}'", value);
                std::process::exit(1);
            }
        },
        _ => {}
    }
}

/// Print help message
fn print_help() {
    println!(
        r#"Blok - resolve translated messages

USAGE:
    blok [OPTIONS] KEY

OPTIONS:
    -h, --help              Show this help message
    -v, --version           Show version information
    -c, --catalog FILE      Load a JSON catalog ({{"en": {{"key": "text"}}}})
    -C, --config FILE       Use this configuration file
    -l, --locale LOCALE     Resolve in LOCALE instead of the configured language
    -n, --count N           Treat KEY as a choice message and select for N
    -d, --data NAME=VALUE   Placeholder value (repeatable)
    -m, --missing           Print keys that failed lookup to stderr

EXAMPLES:
    blok -c messages.json greeting -d name=world
    blok -c messages.json cart.items -n 3
    blok -c messages.json -l fr greeting -d name=monde

ENVIRONMENT:
    RUST_LOG                Log filter (default: info,blok=debug)
"#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}
