//! Id validation command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tagmodel_names::{
    is_valid_action, is_valid_application, is_valid_environment, is_valid_machine,
    is_valid_network, is_valid_relation, is_valid_unit, is_valid_user, Kind,
};

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Kind whose grammar the ids are checked against.
    kind: Kind,

    /// Canonical ids to check.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "Valid")]
    valid: bool,
}

fn is_valid(kind: Kind, id: &str) -> bool {
    match kind {
        Kind::Machine => is_valid_machine(id),
        Kind::Unit => is_valid_unit(id),
        Kind::Application => is_valid_application(id),
        Kind::Relation => is_valid_relation(id),
        Kind::Environment => is_valid_environment(id),
        Kind::User => is_valid_user(id),
        Kind::Network => is_valid_network(id),
        Kind::Action => is_valid_action(id),
    }
}

pub fn run(ctx: CommandContext, args: CheckArgs) -> Result<()> {
    let rows: Vec<CheckRow> = args
        .ids
        .into_iter()
        .map(|id| CheckRow {
            valid: is_valid(args.kind, &id),
            kind: args.kind.to_string(),
            id,
        })
        .collect();

    print_output(&rows, ctx.format);

    let failed = rows.iter().filter(|row| !row.valid).count();
    if failed > 0 {
        return Err(CliError::Rejected {
            failed,
            total: rows.len(),
        }
        .into());
    }
    Ok(())
}
