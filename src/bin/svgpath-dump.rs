#![warn(unused)]

use anyhow::{bail, Context};
use clap::{crate_version, value_parser};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use svgpath::{PathBuilder, PathParser};

#[derive(Debug)]
/// Command-line options for `svgpath-dump`.
struct Opt {
    /// Read path data from this file instead of the command line.
    file: Option<PathBuf>,

    /// Only print the number of commands in each input.
    count: bool,

    /// Path data strings given on the command line.
    data: Vec<String>,
}

/// Prints `input` with a caret under the byte at `position`.
fn print_error_location(input: &str, position: usize) {
    println!("  {input}");
    println!("  {:>width$}", "^", width = position + 1);
}

/// Returns whether the input parsed without errors.
fn dump(opt: &Opt, input: &str) -> bool {
    let mut builder = PathBuilder::default();
    let mut parser = PathParser::new(&mut builder);
    let success = parser.parse(input);
    let error = parser.error();

    if opt.count {
        println!("{}", builder.len());
    } else {
        for cmd in builder.iter() {
            println!("{cmd}");
        }
    }

    if let Some(e) = error {
        println!("{e}");
        print_error_location(input, e.position);
    }

    success
}

fn read_inputs(opt: &Opt) -> anyhow::Result<Vec<String>> {
    if let Some(ref path) = opt.file {
        let data = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        return Ok(vec![data]);
    }

    if !opt.data.is_empty() {
        return Ok(opt.data.clone());
    }

    let mut data = String::new();
    io::stdin()
        .read_to_string(&mut data)
        .context("could not read path data from stdin")?;
    Ok(vec![data])
}

fn run(opt: &Opt) -> anyhow::Result<()> {
    let inputs = read_inputs(opt)?;

    let mut num_failed = 0;
    for input in &inputs {
        if !dump(opt, input.trim_end_matches(&['\r', '\n'][..])) {
            num_failed += 1;
        }
    }

    if num_failed > 0 {
        bail!("{num_failed} of {} inputs had invalid path data", inputs.len());
    }

    Ok(())
}

fn build_cli() -> clap::Command {
    clap::Command::new("svgpath-dump")
        .version(concat!("version ", crate_version!()))
        .about("Prints the commands in SVG path data.")
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .help("Read path data from a file")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("data"),
        )
        .arg(
            clap::Arg::new("count")
                .long("count")
                .help("Print only the number of commands")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("data")
                .help("Path data strings; read from stdin if none are given")
                .value_parser(value_parser!(String))
                .action(clap::ArgAction::Append),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let opt = Opt {
        file: matches.get_one::<PathBuf>("file").cloned(),
        count: matches.get_flag("count"),
        data: matches
            .get_many::<String>("data")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    };

    if let Err(e) = run(&opt) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}
