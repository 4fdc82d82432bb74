use clap::{Parser, Subcommand};
use git_segment::commands::*;
use git_segment::core::{command_init::CommandOptions, error::Result, print_error};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-segment")]
#[command(about = "Single-line git status segment for shell prompts")]
#[command(version)]
struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(long, global = true)]
    debug: bool,

    /// Run as if started in DIR
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Read options from this JSON file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override an option (e.g. --set branch_icon=BR:)
    #[arg(long = "set", global = true, value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the segment for the current repository (default)
    Render {
        /// Do not print a trailing newline
        #[arg(long)]
        no_newline: bool,
    },
    /// Exit successfully only inside a git work tree
    Check,
    /// List every option with its effective value
    Options,
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn exit_on_error<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let options = CommandOptions {
        directory: cli.directory,
        config: cli.config,
        overrides: cli.overrides,
    };

    match cli.command.unwrap_or(Commands::Render { no_newline: false }) {
        Commands::Render { no_newline } => exit_on_error(execute_render(&options, !no_newline)),
        Commands::Check => {
            if !exit_on_error(execute_check(&options)) {
                std::process::exit(1);
            }
        }
        Commands::Options => exit_on_error(execute_options(&options)),
    }
}
