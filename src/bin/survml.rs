//! Command-line interface for survml
//! This binary rewrites survey outline text into survey markup: labeled cell
//! fragments, or a whole question element wrapping a cell block.
//!
//! Usage:
//!   survml cells [path] --tag `<tag>` --prefix `<prefix>`   - Wrap each line in a labeled cell fragment
//!   survml question [path] --type `<type>`                - Wrap a block in a question element

use clap::{Arg, Command};
use std::io::Read;

use survml::survml::cells;
use survml::survml::config::{self, SurvmlConfig};
use survml::survml::error::TransformError;
use survml::survml::normalize::normalize;
use survml::survml::pipeline::Pipeline;
use survml::survml::question;

fn main() {
    let matches = Command::new("survml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for compiling survey outline text into survey markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("cells")
                .about("Wrap each line of the input in a labeled cell fragment")
                .arg(path_arg())
                .arg(
                    Arg::new("tag")
                        .long("tag")
                        .short('t')
                        .help("Cell tag name (e.g. 'row', 'col', 'choice')"),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .short('p')
                        .help("Label prefix (e.g. 'r', 'c', 'ch')"),
                )
                .arg(
                    Arg::new("delimiter")
                        .long("delimiter")
                        .short('d')
                        .help("Fragment delimiter the input is split on (default: newline)"),
                )
                .arg(config_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("question")
                .about("Wrap the input block in a question element")
                .arg(path_arg())
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('q')
                        .help("Question element type (e.g. 'radio', 'checkbox', 'text')"),
                )
                .arg(
                    Arg::new("special")
                        .long("special")
                        .help("Host-specific extra, carried through unchanged"),
                )
                .arg(config_arg())
                .arg(format_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("cells", sub)) => handle_cells_command(sub),
        Some(("question", sub)) => handle_question_command(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Input file; omit or pass '-' to read stdin")
        .index(1)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("YAML file with pipeline defaults (flags override it)")
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: 'markup', or 'json' for the intermediate values")
        .default_value("markup")
}

/// Handle the cells subcommand
fn handle_cells_command(matches: &clap::ArgMatches) {
    let mut options = load_defaults(matches).cells;
    if let Some(tag) = matches.get_one::<String>("tag") {
        options.tag = tag.clone();
    }
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        options.prefix = prefix.clone();
    }
    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        options.delimiter = delimiter.clone();
    }

    let input = read_input(matches.get_one::<String>("path"));

    match format_of(matches) {
        OutputFormat::Markup => {
            let output = Pipeline::Cells(options)
                .run(&input)
                .unwrap_or_else(report_and_exit);
            print!("{}", output);
        }
        OutputFormat::Json => {
            // JSON mode shows the labeled lines instead of the rendered markup
            let cleaned = normalize(input.trim());
            let lines = cells::label_lines(&cleaned, &options.delimiter);
            print_json(&lines);
        }
    }
}

/// Handle the question subcommand
fn handle_question_command(matches: &clap::ArgMatches) {
    let mut options = load_defaults(matches).question;
    if let Some(question_type) = matches.get_one::<String>("type") {
        options.question_type = question_type.clone();
    }
    if let Some(special) = matches.get_one::<String>("special") {
        options.special = Some(special.clone());
    }

    let input = read_input(matches.get_one::<String>("path"));

    match format_of(matches) {
        OutputFormat::Markup => {
            let output = Pipeline::Question(options)
                .run(&input)
                .unwrap_or_else(report_and_exit);
            print!("{}", output);
        }
        OutputFormat::Json => {
            let cleaned = normalize(input.trim());
            let parsed = question::parse(&cleaned).unwrap_or_else(report_and_exit);
            print_json(&parsed);
        }
    }
}

enum OutputFormat {
    Markup,
    Json,
}

fn format_of(matches: &clap::ArgMatches) -> OutputFormat {
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");
    match format.as_str() {
        "markup" => OutputFormat::Markup,
        "json" => OutputFormat::Json,
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: markup, json");
            std::process::exit(1);
        }
    }
}

fn load_defaults(matches: &clap::ArgMatches) -> SurvmlConfig {
    match matches.get_one::<String>("config") {
        Some(path) => config::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config {}: {}", path, e);
            std::process::exit(1);
        }),
        None => SurvmlConfig::default(),
    }
}

fn read_input(path: Option<&String>) -> String {
    match path.map(String::as_str) {
        None | Some("-") => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .unwrap_or_else(|e| {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                });
            input
        }
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }),
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

fn report_and_exit<T>(error: TransformError) -> T {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}
