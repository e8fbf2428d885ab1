//! CLI entry point for the `dgraph` interactive graph menu.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use digraph_menu::cli::{OutputFormat, Shell, ShellConfig};
use digraph_menu::DEFAULT_DOT_FILE;

#[derive(Parser)]
#[command(
    name = "dgraph",
    about = "Interactive directed graph: insert, remove, traverse and export to DOT"
)]
struct Cli {
    /// File written by the export option
    #[arg(long, default_value = DEFAULT_DOT_FILE)]
    dot_file: PathBuf,

    /// Output format: "text" (default) or "json"
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not print the option menu before each prompt
    #[arg(long)]
    no_menu: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ShellConfig {
        dot_path: cli.dot_file,
        format: cli.format,
        show_menu: !cli.no_menu,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);

    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
