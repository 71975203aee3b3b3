//! CLI commands.

mod action;
mod check;
mod format;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// tagctl - Inspect and build entity tags.
#[derive(Debug, Parser)]
#[command(name = "tagctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table", env = "TAGCTL_FORMAT")]
    format: String,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse tag strings and show their kind and id.
    Parse(parse::ParseArgs),

    /// Build a tag string from a kind and a canonical id.
    Format(format::FormatArgs),

    /// Check ids against a kind's grammar.
    Check(check::CheckArgs),

    /// Build the tag for an action queued against a unit.
    Action(action::ActionArgs),
}

/// Context passed to command handlers.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub format: OutputFormat,
}

impl Cli {
    /// Returns true if verbose logging was requested.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run the selected command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::from_flag(&self.format),
        };

        match self.command {
            Commands::Parse(args) => parse::run(ctx, args),
            Commands::Format(args) => format::run(ctx, args),
            Commands::Check(args) => check::run(ctx, args),
            Commands::Action(args) => action::run(ctx, args),
        }
    }
}
