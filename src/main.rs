use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use textbounds::{Fields, Input, ScanOptions, Template};

const DEBUG_ENV: &str = "TEXTBOUNDS_DEBUG";
const VERBOSE_ENV: &str = "TEXTBOUNDS_VERBOSE";

/// Show the number of lines and the maximum line length of each file.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Verbose output, also enabled by setting TEXTBOUNDS_VERBOSE.
    #[clap(short, long)]
    verbose: bool,

    /// Debug output, also enabled by setting TEXTBOUNDS_DEBUG.
    #[clap(short, long)]
    debug: bool,

    /// Show file name
    #[clap(long)]
    name: bool,

    /// Show number of lines (same as wc -l)
    #[clap(long)]
    lines: bool,

    /// Show number of columns (maximum line length)
    #[clap(long)]
    columns: bool,

    /// Result template. %f is the file name, %l the lines, %c the columns and %% a
    /// literal percent. Overrides --name, --lines and --columns.
    #[clap(long, value_name = "TEMPLATE")]
    format: Option<String>,

    /// Count trailing whitespace toward the width of a line
    #[clap(short, long)]
    trailing_whitespace: bool,

    /// Files to measure, - is standard input. Reads standard input when empty.
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // help and version are printed to stdout and are not errors
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logger(&args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("{}: {err:#}", env!("CARGO_PKG_NAME"));
            ExitCode::from(2)
        }
    }
}

fn init_logger(args: &Args) {
    let debug = args.debug || std::env::var_os(DEBUG_ENV).is_some();
    let verbose = args.verbose || std::env::var_os(VERBOSE_ENV).is_some();
    let level = if debug {
        log::LevelFilter::Debug
    } else if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let template = match args.format {
        Some(ref format) => Template::parse(format),
        None => Template::from_fields(Fields {
            name: args.name,
            lines: args.lines,
            columns: args.columns,
        }),
    };
    let options = ScanOptions::trailing_whitespace(args.trailing_whitespace);

    let inputs: Vec<Input> = if args.files.is_empty() {
        vec![Input::Stdin]
    } else {
        args.files.iter().map(Input::from_arg).collect()
    };
    log::info!("files : {:?}", args.files);
    log::debug!("template = {template}, options = {options:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    textbounds::files::measure_all(&inputs, options, &template, &mut out)
        .context("Failed to measure text bounds")?;
    Ok(())
}
