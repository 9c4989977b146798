use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by texprev-babel's FormatRegistry::with_defaults.
// Build scripts can't depend on the crate they build for.
const FORMATS: &[&str] = &["html", "html-page", "trace"];

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("texprev")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Preview LaTeX resumes as HTML")
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input_arg("input"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("standalone").long("standalone").action(ArgAction::SetTrue))
                .arg(Arg::new("no-escape").long("no-escape").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("closing-tags")
                        .long("closing-tags")
                        .value_parser(["block", "any"]),
                )
                .arg(Arg::new("title").long("title"))
                .arg(
                    Arg::new("css")
                        .long("css")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .arg(input_arg("path"))
                .arg(Arg::new("changed-only").long("changed-only").action(ArgAction::SetTrue))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("rules"))
        .subcommand(Command::new("sample"))
        .subcommand(Command::new("generate-css"));

    generate_to(Bash, &mut cmd, "texprev", &outdir)?;
    generate_to(Zsh, &mut cmd, "texprev", &outdir)?;
    generate_to(Fish, &mut cmd, "texprev", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
