//! Action tag command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tagmodel_names::{ActionTag, UnitTag};

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ActionArgs {
    /// Unit the action is queued for, e.g. mysql/0.
    unit: String,

    /// Sequence number of the action within the unit.
    sequence: u32,

    /// Print the tag prefix shared by all actions of the unit instead.
    #[arg(long)]
    prefix: bool,
}

#[derive(Debug, Serialize)]
struct ActionResponse {
    unit: UnitTag,
    sequence: u32,
    id: String,
    tag: String,
    prefix: String,
}

pub fn run(ctx: CommandContext, args: ActionArgs) -> Result<()> {
    let unit = UnitTag::try_new(&args.unit).map_err(CliError::from)?;
    let action = ActionTag::new(unit.clone(), args.sequence);
    let response = ActionResponse {
        prefix: ActionTag::unit_prefix(&unit),
        id: action.id(),
        tag: action.to_string(),
        sequence: action.sequence(),
        unit,
    };

    let display = if args.prefix {
        &response.prefix
    } else {
        &response.tag
    };
    print_single(&response, display, ctx.format);
    Ok(())
}
