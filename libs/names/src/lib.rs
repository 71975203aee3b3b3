//! # tagmodel-names
//!
//! Entity tags for the orchestration model and their canonical string form.
//!
//! ## Design Principles
//!
//! - A tag is a typed reference to an entity: machine, unit, application,
//!   relation, environment, user, network or action
//! - Every tag has exactly one tag string, and parsing that string yields
//!   an equal tag (parse → format → parse)
//! - The kind is decided by the prefix token alone; the remainder must then
//!   satisfy that kind's id grammar
//! - Trusted ids (`new`) panic when invalid; untrusted strings (`parse`)
//!   return a [`TagError`]
//!
//! ## Tag Format
//!
//! All tag strings use the format `{kind}-{id}`, with characters that are
//! awkward in flat identifiers substituted:
//!
//! - `machine-0`, `machine-10-lxc-1` (id `10/lxc/1`)
//! - `unit-mysql-1` (id `mysql/1`)
//! - `application-wordpress`
//! - `relation-wordpress.db#mysql.server` (id `wordpress:db mysql:server`)
//! - `environment-f47ac10b-58cc-4372-a567-0e02b2c3d479`
//! - `user-admin@local`
//! - `network-eth0`
//! - `action-mysql-1_a_321` (id `mysql/1_a_321`)
//!
//! Tags are not checked against any registry; only the string is validated.

mod action;
mod error;
mod grammar;
mod kind;
mod macros;
mod tag;
mod types;

pub use action::{is_action, is_valid_action, parse_action_id, ActionTag, MARKER};
pub use error::TagError;
pub use grammar::{
    is_valid_application, is_valid_environment, is_valid_machine, is_valid_network,
    is_valid_relation, is_valid_unit, is_valid_user,
};
pub use kind::Kind;
pub use tag::{parse_tag, Tag};
pub use types::*;
