//! textmerge CLI
//!
//! Usage:
//!   textmerge [OPTIONS] --data <FILE> [TEMPLATE]
//!
//! Options:
//!   --data <FILE>         JSON document supplying placeholder values
//!   -m, --mode <MODE>     Serialization mode: plain or json
//!   -c, --config <FILE>   Config file (TOML format)
//!   -d, --debug           Log rendering steps to stderr
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use textmerge::{render_with_config, MergeConfig, Mode};

#[derive(Parser)]
#[command(name = "textmerge")]
#[command(about = "Fill ${path} placeholders in a text template from a JSON document")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    template: Option<PathBuf>,

    /// JSON document supplying placeholder values
    #[arg(long)]
    data: Option<PathBuf>,

    /// Serialization mode for substituted values
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log rendering steps to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.template.is_none() && cli.data.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load config
    let mut config = match &cli.config {
        Some(path) => match MergeConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => fail(&format!("Error loading config '{}': {}", path.display(), e)),
        },
        None => MergeConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    let Some(data_path) = cli.data.clone().or_else(|| config.data.clone()) else {
        fail("Error: no data file given (use --data or set `data` in the config file)");
    };

    let data: serde_json::Value = match fs::read_to_string(&data_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => fail(&format!("Error parsing data file '{}': {}", data_path.display(), e)),
        },
        Err(e) => fail(&format!("Error reading data file '{}': {}", data_path.display(), e)),
    };

    // Read template
    let (template, filename) = match &cli.template {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => fail(&format!("Error reading file '{}': {}", path.display(), e)),
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => fail(&format!("Error reading from stdin: {}", e)),
            }
        }
    };

    match render_with_config(&template, &data, &config.render_config()) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            let color = io::stderr().is_terminal();
            eprint!("{}", e.format(&template, &filename, color));
            process::exit(1);
        }
    }
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn print_intro() {
    println!(
        r#"textmerge - fill ${{path}} placeholders from a JSON document

USAGE:
    textmerge --data <FILE> [OPTIONS] [TEMPLATE]
    echo 'Hello ${{user.name}}' | textmerge --data user.json

OPTIONS:
    --data <FILE>      JSON document supplying placeholder values
    -m, --mode <MODE>  plain (default) or json
    -c, --config       Config file (TOML) with `mode` and `data` defaults
    -d, --debug        Log rendering steps to stderr
    -h, --help         Print help

MODES:
    plain   strings without quotes, numbers and booleans as written,
            null as `null`; objects and lists are an error
    json    every value as JSON text"#
    );
}
