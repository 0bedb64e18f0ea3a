// Command-line interface for md2html
//
// This binary converts Markdown files to HTML fragments and exposes the
// converter's intermediate stages for inspection.
//
// Converting:
//
// The conversion takes an input path and an output path. Formats are
// auto-detected from the file extensions (falling back to markdown/html),
// overridable with explicit --from / --to flags.
// Usage:
//  md2html <input> <output>                    - Convert (default command)
//  md2html convert <input> <output>            - Same as above (explicit)
//  md2html inspect <path> [<transform>]        - Execute a transform (defaults to "blocks-treeviz")
//  md2html --list-transforms                   - List available transforms
//
// Extra Parameters:
//
// Configuration values can be overridden using --extra-<name> [value].
// Example:
//  md2html doc.md doc.html --extra-heading-overflow clamp
//  md2html inspect doc.md lines-simple --extra-show-linum false

use md2html_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use md2html_config::{HeadingOverflowConfig, Loader, Md2HtmlConfig};
use md2html_convert::formats::markdown::parser::parse_with_options;
use md2html_convert::formats::markdown::MarkdownOptions;
use md2html_convert::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("md2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting Markdown files to HTML fragments")
        .long_about(
            "md2html converts a small Markdown dialect (headings, flat lists,\n\
            paragraphs, inline spans) into an HTML fragment.\n\n\
            Commands:\n  \
            - convert: Convert a Markdown file to HTML (default command)\n  \
            - inspect: View intermediate stages (line classes, block IR)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration values.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            md2html README.md README.html              # Convert\n  \
            md2html inspect README.md                  # View block tree\n  \
            md2html inspect README.md lines-json       # View line classes\n  \
            md2html doc.md doc.html --extra-heading-overflow clamp",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2html.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown file to an HTML fragment (default command)")
                .long_about(
                    "Convert a Markdown file to an HTML fragment.\n\n\
                    Supported formats:\n  \
                    - markdown: line-oriented Markdown dialect (source)\n  \
                    - html:     HTML fragment (target)\n  \
                    - treeviz:  block tree visualization (target)\n\n\
                    Formats are auto-detected from the file extensions and fall\n\
                    back to markdown/html. The output file is overwritten if it\n\
                    exists.\n\n\
                    Examples:\n  \
                    md2html convert README.md README.html\n  \
                    md2html README.md README.html            # 'convert' is optional\n  \
                    md2html notes.txt out.html --from markdown",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .help("Output file path (overwritten if present)")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from the input extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (auto-detected from the output extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect intermediate stages of the conversion")
                .long_about(
                    "View the converter's intermediate stages for a Markdown file.\n\n\
                    Transforms (stage-format):\n  \
                    - lines-simple:   one classification name per input line\n  \
                    - lines-json:     per-line classification as JSON\n  \
                    - blocks-json:    block IR as JSON\n  \
                    - blocks-treeviz: block tree visualization (default)\n\n\
                    Examples:\n  \
                    md2html inspect file.md                   # Tree visualization\n  \
                    md2html inspect file.md lines-simple      # Line classes\n  \
                    md2html inspect file.md lines-simple --extra-show-linum false",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'blocks-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches
                .get_one::<String>("output")
                .expect("output is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            handle_convert_command(input, output, from, to, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("blocks-treeviz");
            handle_inspect_command(path, transform, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    output: &str,
    from_arg: Option<&str>,
    to_arg: Option<&str>,
    config: &Md2HtmlConfig,
) {
    let registry = FormatRegistry::default();

    // Auto-detect formats from the file extensions, falling back to
    // markdown/html for unknown extensions
    let from = from_arg
        .map(str::to_string)
        .or_else(|| registry.detect_format_from_filename(input))
        .unwrap_or_else(|| "markdown".to_string());
    let to = to_arg
        .map(str::to_string)
        .or_else(|| registry.detect_format_from_filename(output))
        .unwrap_or_else(|| "html".to_string());

    // Validate formats exist
    if let Err(e) = registry.get(&from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(&to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if !Path::new(input).is_file() {
        eprintln!("Missing {input}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    // Markdown takes the configured parsing policies; anything else goes
    // through the registry unchanged.
    let doc = if from == "markdown" {
        parse_with_options(&source, &markdown_options_from_config(config))
    } else {
        registry.parse(&source, &from).unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        })
    };

    let rendered = registry.serialize(&doc, &to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    fs::write(output, rendered).unwrap_or_else(|e| {
        eprintln!("Error writing file '{output}': {e}");
        std::process::exit(1);
    });
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, config: &Md2HtmlConfig) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let options = markdown_options_from_config(config);
    let output = transforms::execute_transform(
        &source,
        transform,
        &options,
        config.inspect.lines.show_numbers,
    )
    .unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  lines   - Per-line classification (the transducer's input)");
    println!("  blocks  - Assembled block IR (the transducer's output)\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Md2HtmlConfig {
    let loader = Loader::new().with_optional_file("md2html.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn markdown_options_from_config(config: &Md2HtmlConfig) -> MarkdownOptions {
    MarkdownOptions::from(&config.convert.markdown)
}

fn apply_config_overrides(config: &mut Md2HtmlConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["strict-markers", "strict-list-markers"]) {
        config.convert.markdown.strict_list_markers = parse_bool_arg("strict-markers", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["heading-overflow"]) {
        config.convert.markdown.heading_overflow = match raw.as_str() {
            "verbatim" => HeadingOverflowConfig::Verbatim,
            "clamp" => HeadingOverflowConfig::Clamp,
            other => {
                eprintln!("Invalid policy '{other}' for --extra-heading-overflow");
                std::process::exit(1);
            }
        };
    }

    if let Some(raw) = take_override(extra_params, &["show-linum", "show-line-numbers"]) {
        config.inspect.lines.show_numbers = parse_bool_arg("show-linum", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
