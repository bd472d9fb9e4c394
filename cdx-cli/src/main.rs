//! Command-line interface for cdx
//! This binary inspects CDX documents: token trees, token JSON, content-line flags, or
//! Prism-compatible HTML.
//!
//! Usage:
//!   cdx `<path>` [--format `<format>`] [--config `<file>`]   - Lex a file and print it in a format
//!   cdx --classify `<value>`                                - Print the token tree of one value
//!   cdx --list-formats                                      - List the available formats

mod html;

use cdx_config::{CdxConfig, Loader};
use cdx_parser::cdx::formats::token_json::to_token_json;
use cdx_parser::cdx::formats::treeviz::{to_treeviz_str, TreevizFormatter, TreevizOptions};
use cdx_parser::cdx::formats::FormatRegistry;
use cdx_parser::cdx::lexing::{lex_literal, LexOptions};
use cdx_parser::cdx::loader::DocumentLoader;
use clap::{Arg, ArgAction, ArgMatches, Command};
use html::{HtmlFormatter, LANGUAGES};
use tracing_subscriber::EnvFilter;

/// Project-local configuration, layered when present.
const LOCAL_CONFIG: &str = "cdx.toml";

fn main() {
    let matches = Command::new("cdx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting CDX documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the cdx file")
                .required_unless_present_any(["classify", "list-formats"])
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (treeviz, token-json, lines, html)")
                .default_value("treeviz"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the defaults"),
        )
        .arg(
            Arg::new("classify")
                .long("classify")
                .help("Classify a single trait value instead of a file")
                .conflicts_with("path"),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .help("Language name used in the HTML code class")
                .value_parser(LANGUAGES)
                .default_value("cdx"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&matches);
        return;
    }

    let config = load_config(matches.get_one::<String>("config"));
    let options = config.lex_options().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("treeviz");

    if let Some(value) = matches.get_one::<String>("classify") {
        handle_classify_command(value, format, &config, &options);
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A path is required unless --classify or --list-formats is given");
        std::process::exit(1);
    };
    handle_execute_command(path, format, &matches, &config, &options);
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(explicit: Option<&String>) -> CdxConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = explicit {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// Built-in formats, with treeviz rebuilt from the configured options and HTML added.
fn registry(matches: &ArgMatches, treeviz: TreevizOptions) -> FormatRegistry {
    let language = matches
        .get_one::<String>("language")
        .map(String::as_str)
        .unwrap_or("cdx");
    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(treeviz));
    registry.register(HtmlFormatter::new(language));
    registry
}

/// Handle the execute command
fn handle_execute_command(
    path: &str,
    format: &str,
    matches: &ArgMatches,
    config: &CdxConfig,
    options: &LexOptions,
) {
    let registry = registry(matches, config.treeviz_options());
    if !registry.has(format) {
        eprintln!("Format '{}' not found", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let document = DocumentLoader::from_path(path)
        .and_then(|loader| loader.highlight_with(options))
        .unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        });

    let output = registry.serialize(&document, format).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}

/// Handle the classify command
fn handle_classify_command(value: &str, format: &str, config: &CdxConfig, options: &LexOptions) {
    let token = lex_literal(value, options.precedence());
    let output = match format {
        "treeviz" => to_treeviz_str(value, &[token], &config.treeviz_options()),
        "token-json" => to_token_json(value, &[token]).unwrap_or_else(|e| {
            eprintln!("Error formatting tokens: {}", e);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Format '{}' not supported for --classify", other);
            eprintln!("Available formats for --classify: treeviz, token-json");
            std::process::exit(1);
        }
    };
    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command(matches: &ArgMatches) {
    let registry = registry(matches, TreevizOptions::default());
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
