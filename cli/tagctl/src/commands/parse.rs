//! Tag parsing command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tagmodel_names::{parse_tag, Tag};
use tracing::debug;

use crate::error::CliError;
use crate::output::{display_option, print_output};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Tag strings, e.g. unit-mysql-0 or action-mysql-0_a_1.
    #[arg(required = true)]
    tags: Vec<String>,
}

/// One parsed (or rejected) tag string.
#[derive(Debug, Clone, Serialize, Tabled)]
pub(super) struct TagRow {
    #[tabled(rename = "Input")]
    pub input: String,

    #[tabled(rename = "Tag", display = "display_option")]
    pub tag: Option<String>,

    #[tabled(rename = "Kind", display = "display_option")]
    pub kind: Option<String>,

    #[tabled(rename = "ID", display = "display_option")]
    pub id: Option<String>,

    #[tabled(rename = "Error", display = "display_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TagRow {
    pub(super) fn from_result(input: &str, result: Result<Tag, tagmodel_names::TagError>) -> Self {
        match result {
            Ok(tag) => Self {
                input: input.to_string(),
                tag: Some(tag.to_string()),
                kind: Some(tag.kind().to_string()),
                id: Some(tag.id()),
                error: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                tag: None,
                kind: err.kind().map(|kind| kind.to_string()),
                id: None,
                error: Some(err.to_string()),
            },
        }
    }

    pub(super) fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

pub fn run(ctx: CommandContext, args: ParseArgs) -> Result<()> {
    let rows: Vec<TagRow> = args
        .tags
        .iter()
        .map(|input| {
            let result = parse_tag(input);
            debug!(input = %input, ok = result.is_ok(), "parsed tag");
            TagRow::from_result(input, result)
        })
        .collect();

    print_output(&rows, ctx.format);

    let failed = rows.iter().filter(|row| row.is_error()).count();
    if failed > 0 {
        return Err(CliError::Rejected {
            failed,
            total: rows.len(),
        }
        .into());
    }
    Ok(())
}
