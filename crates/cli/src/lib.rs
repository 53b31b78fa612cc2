pub mod commands;
pub mod config;
pub mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "quotemill",
    about = "Quote version pricing CLI",
    long_about = "Price multi-year SaaS quote versions from a reference snapshot and a version request.",
    after_help = "Examples:\n  quotemill calculate --input quote.toml\n  quotemill validate --input quote.toml\n  quotemill demo"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Price a quote version from a TOML input file")]
    Calculate {
        #[arg(long, help = "Path to the TOML file holding the snapshot and request")]
        input: PathBuf,
    },
    #[command(about = "Check an input file for reference and configuration problems")]
    Validate {
        #[arg(long, help = "Path to the TOML file holding the snapshot and request")]
        input: PathBuf,
    },
    #[command(about = "Price a built-in sample quote end to end")]
    Demo,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Calculate { input } => commands::calculate::run(&input),
        Command::Validate { input } => commands::validate::run(&input),
        Command::Demo => commands::demo::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
