//! Error handling and display for the CLI.

use colored::Colorize;
use tagmodel_names::{Kind, TagError};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{failed} of {total} inputs were rejected")]
    Rejected { failed: usize, total: usize },

    #[error(transparent)]
    Tag(#[from] TagError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(CliError::Tag(tag_err)) = err.downcast_ref::<CliError>() {
        if let Some(hint) = hint(tag_err) {
            eprintln!("\n{}", format!("Hint: {hint}").yellow());
        }
    }
}

fn hint(err: &TagError) -> Option<String> {
    match err {
        TagError::Malformed { .. } | TagError::UnknownKind { .. } => {
            let kinds: Vec<_> = Kind::ALL.iter().map(Kind::as_str).collect();
            Some(format!(
                "tags look like <kind>-<id>, where kind is one of: {}",
                kinds.join(", ")
            ))
        }
        TagError::InvalidId {
            kind: Kind::Unit, ..
        }
        | TagError::InvalidTag {
            kind: Kind::Unit, ..
        } => Some("unit names look like <application>/<number>, e.g. mysql/0".to_string()),
        TagError::InvalidId {
            kind: Kind::Action, ..
        }
        | TagError::InvalidTag {
            kind: Kind::Action, ..
        } => Some("action ids look like <unit>_a_<sequence>, e.g. mysql/0_a_1".to_string()),
        _ => None,
    }
}
