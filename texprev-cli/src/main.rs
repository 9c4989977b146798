// Command-line interface for texprev
//
// This binary previews LaTeX resumes as HTML. All conversion logic lives in the
// texprev-babel crate; this file is argument handling, config layering and I/O.
//
// Usage:
//  texprev <input> [--to <format>] [--output <file>]         - Convert (default command)
//  texprev convert <input> [--to <format>] [--output <file>] - Same as above (explicit)
//  texprev inspect <input> [--changed-only] [--json]         - Show every pipeline step
//  texprev rules                                             - List the rule chain
//  texprev sample                                            - Print the built-in resume
//  texprev generate-css                                      - Print the preview stylesheet
//
// `-` as input reads from stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  texprev cv.tex --to html-page --extra-title "Jane Doe"

mod input;
mod listing;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{debug, warn, LevelFilter};
use std::collections::HashMap;
use std::fs;
use texprev_babel::formats::{get_default_css, is_markup_file};
use texprev_babel::publish::{publish_with_registry, PublishArtifact, PublishSpec};
use texprev_babel::samples::SAMPLE_RESUME;
use texprev_babel::{trace, Format, FormatOptions, FormatRegistry};
use texprev_config::{ClosingTags, Loader, TexprevConfig, PROJECT_CONFIG_FILE};

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "rules", "sample", "generate-css", "help"];

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
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
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

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Path to the .tex file, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("texprev")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Preview LaTeX resumes as HTML")
        .long_about(
            "texprev converts the LaTeX subset used by one-page resumes into HTML.\n\n\
            Commands:\n  \
            - convert: Translate a .tex file to an HTML fragment or page (default)\n  \
            - inspect: Show the text after every step of the translator\n  \
            - rules:   List the recognized constructs in pipeline order\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            texprev cv.tex                          # HTML fragment to stdout\n  \
            texprev cv.tex -o cv.html --standalone  # Full page to a file\n  \
            texprev sample | texprev -              # Convert the built-in resume\n  \
            texprev inspect cv.tex --changed-only   # Debug a conversion",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a texprev.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output on stderr (repeatable)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a .tex file to HTML (default command)")
                .long_about(
                    "Convert a resume to HTML.\n\n\
                    Formats:\n  \
                    - html:      HTML fragment for embedding in a preview pane\n  \
                    - html-page: Standalone HTML5 page with embedded CSS\n  \
                    - trace:     Text after every translator step\n\n\
                    Without --to, the format is detected from the --output extension,\n\
                    falling back to convert.default_format from the configuration.",
                )
                .arg(input_arg("input"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (html, html-page, trace)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("standalone")
                        .long("standalone")
                        .help("Wrap the fragment into a full HTML page")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-escape")
                        .long("no-escape")
                        .help("Pass &, < and > in the source through unescaped")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("closing-tags")
                        .long("closing-tags")
                        .help("Closing tags that keep a line out of a paragraph")
                        .value_parser(["block", "any"]),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Page title for standalone output"),
                )
                .arg(
                    Arg::new("css")
                        .long("css")
                        .value_name("PATH")
                        .help("Stylesheet appended to standalone pages")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the text after every translator step")
                .arg(input_arg("path"))
                .arg(
                    Arg::new("changed-only")
                        .long("changed-only")
                        .help("Only show steps that changed the text")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the steps as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("rules").about("List the rule chain in execution order"))
        .subcommand(Command::new("sample").about("Print the built-in sample resume"))
        .subcommand(
            Command::new("generate-css")
                .about("Output the stylesheet embedded into standalone pages"),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_convert(&cleaned_args) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_count("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            apply_convert_flags(&mut config, sub_matches);
            let input = required(sub_matches, "input");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            if sub_matches.get_flag("changed-only") {
                config.inspect.changed_only = true;
            }
            let path = required(sub_matches, "path");
            handle_inspect_command(path, sub_matches.get_flag("json"), &config);
        }
        Some(("rules", _)) => print!("{}", listing::render_rule_listing()),
        Some(("sample", _)) => print!("{SAMPLE_RESUME}"),
        Some(("generate-css", _)) => print!("{}", get_default_css()),
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

/// A first argument that is not a flag or a subcommand is an input path.
fn should_inject_convert(args: &[String]) -> bool {
    args.get(1).is_some_and(|first| {
        (first == input::STDIN_PATH || !first.starts_with('-'))
            && !SUBCOMMANDS.contains(&first.as_str())
    })
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    match matches.get_one::<String>(id) {
        Some(value) => value.as_str(),
        None => fail(&format!("missing required argument '{id}'")),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &TexprevConfig,
) {
    let registry = FormatRegistry::default();
    let to = resolve_target_format(&registry, to, output, config);

    let format = registry
        .get(&to)
        .unwrap_or_else(|e| fail(&e.to_string()));

    if input != input::STDIN_PATH && !is_markup_file(input) {
        warn!("'{input}' does not have a .tex extension, converting anyway");
    }
    let source = input::read_source(input).unwrap_or_else(|e| {
        fail(&format!("reading '{}': {e}", input::display_name(input)))
    });

    // config-derived options, restricted to what the target accepts
    let accepted = format.option_keys();
    let standalone = to == "html-page"
        || config.convert.html.standalone
        || extra_params.get("standalone").is_some_and(|v| v == "true");
    let embeds_stylesheet = accepted.contains(&"css") && standalone;
    let mut options: FormatOptions = config_format_options(config, embeds_stylesheet)
        .into_iter()
        .filter(|(key, _)| accepted.contains(&key.as_str()))
        .collect();
    // --extra-* is passed through unfiltered so typos are reported
    for (key, value) in extra_params {
        options.insert(key.clone(), value.clone());
    }
    debug!("converting {} to {to} with {options:?}", input::display_name(input));

    let mut spec = PublishSpec::new(&source, &to).with_options(options);
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }
    let result = publish_with_registry(&registry, spec).unwrap_or_else(|e| fail(&e.to_string()));

    if let PublishArtifact::InMemory(rendered) = result.artifact {
        print!("{rendered}");
    }
}

fn resolve_target_format(
    registry: &FormatRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &TexprevConfig,
) -> String {
    if let Some(explicit) = to {
        return explicit.to_string();
    }
    if let Some(detected) = output.and_then(|path| registry.detect_format_from_filename(path)) {
        return detected;
    }
    config.convert.default_format.clone()
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, json: bool, config: &TexprevConfig) {
    let source = input::read_source(path).unwrap_or_else(|e| {
        fail(&format!("reading '{}': {e}", input::display_name(path)))
    });

    let stages = trace(&source, &config.translate_options());
    if json {
        let stages: Vec<_> = stages
            .into_iter()
            .enumerate()
            .filter(|(index, stage)| !config.inspect.changed_only || *index == 0 || stage.changed)
            .map(|(_, stage)| stage)
            .collect();
        let rendered = serde_json::to_string_pretty(&stages)
            .unwrap_or_else(|e| fail(&format!("JSON serialization failed: {e}")));
        println!("{rendered}");
    } else {
        print!(
            "{}",
            texprev_babel::formats::trace::render_stages(&stages, config.inspect.changed_only)
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TexprevConfig {
    let loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

fn apply_convert_flags(config: &mut TexprevConfig, matches: &ArgMatches) {
    let html = &mut config.convert.html;
    if matches.get_flag("standalone") {
        html.standalone = true;
    }
    if matches.get_flag("no-escape") {
        html.escape = false;
    }
    if let Some(policy) = matches.get_one::<String>("closing-tags") {
        html.closing_tags = match policy.as_str() {
            "any" => ClosingTags::Any,
            _ => ClosingTags::Block,
        };
    }
    if let Some(title) = matches.get_one::<String>("title") {
        html.title = title.clone();
    }
    if let Some(css) = matches.get_one::<String>("css") {
        html.custom_css = css.clone();
    }
}

/// Every option the configuration can feed to a format.
///
/// The custom stylesheet is only read from disk when `with_stylesheet` is set.
fn config_format_options(config: &TexprevConfig, with_stylesheet: bool) -> FormatOptions {
    let html = &config.convert.html;
    let mut options = FormatOptions::new();
    options.insert("escape".to_string(), html.escape.to_string());
    options.insert(
        "closing-tags".to_string(),
        match html.closing_tags {
            ClosingTags::Block => "block",
            ClosingTags::Any => "any",
        }
        .to_string(),
    );
    if html.standalone {
        options.insert("standalone".to_string(), "true".to_string());
    }
    options.insert("title".to_string(), html.title.clone());
    if let Some(path) = html.custom_css_path().filter(|_| with_stylesheet) {
        let css = fs::read_to_string(path)
            .unwrap_or_else(|e| fail(&format!("reading stylesheet '{path}': {e}")));
        options.insert("css".to_string(), css);
    }
    options.insert(
        "changed-only".to_string(),
        config.inspect.changed_only.to_string(),
    );
    options
}
