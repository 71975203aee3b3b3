//! Tag building command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tagmodel_names::{Kind, Tag};

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Kind of tag (machine, unit, application, relation, environment, user, network, action).
    kind: Kind,

    /// Canonical id, e.g. mysql/0 or 10/lxc/1.
    id: String,
}

#[derive(Debug, Serialize)]
struct FormatResponse {
    kind: String,
    id: String,
    tag: String,
}

pub fn run(ctx: CommandContext, args: FormatArgs) -> Result<()> {
    let tag = Tag::from_id(args.kind, &args.id).map_err(CliError::from)?;
    let response = FormatResponse {
        kind: tag.kind().to_string(),
        id: tag.id(),
        tag: tag.to_string(),
    };
    print_single(&response, &response.tag, ctx.format);
    Ok(())
}
