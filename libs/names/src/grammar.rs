//! Id grammars and the flattening table shared by formatters and parsers.
//!
//! Each kind has one validity predicate. Constructors, the tag-string
//! parser and the public `is_valid_*` functions all consult it.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

const NUMBER: &str = "(?:0|[1-9][0-9]*)";
const CONTAINER_TYPE: &str = "[a-z]+";
const APPLICATION: &str = "(?:[a-z][a-z0-9]*(?:-[a-z0-9]*[a-z][a-z0-9]*)*)";
const RELATION_NAME: &str = "(?:[a-z][a-z0-9]*(?:[_-][a-z0-9]+)*)";
const USER_NAME: &str = "(?:[a-zA-Z0-9](?:[a-zA-Z0-9.+-]*[a-zA-Z0-9])?)";
const DOMAIN: &str = "(?:[a-zA-Z0-9](?:[a-zA-Z0-9.-]*[a-zA-Z0-9])?)";

static MACHINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!("^{NUMBER}(?:/{CONTAINER_TYPE}/{NUMBER})*$"))
});

static APPLICATION_RE: LazyLock<Regex> = LazyLock::new(|| compile(&format!("^{APPLICATION}$")));

static UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("^{APPLICATION}/({NUMBER})$")));

static RELATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let endpoint = format!("{APPLICATION}:{RELATION_NAME}");
    compile(&format!("^{endpoint}(?: {endpoint})?$"))
});

static ENVIRONMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile("^[a-zA-Z0-9][a-zA-Z0-9._-]*$"));

static USER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("^{USER_NAME}(?:@{DOMAIN})?$")));

static NETWORK_RE: LazyLock<Regex> = LazyLock::new(|| compile("^[a-zA-Z0-9]+(?:[_-][a-zA-Z0-9]+)*$"));

fn compile(pattern: &str) -> Regex {
    // Patterns are assembled from the constants above.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid id pattern {pattern:?}: {e}"))
}

/// Returns true if `id` is a valid machine id, e.g. `0` or `10/lxc/1`.
pub fn is_valid_machine(id: &str) -> bool {
    MACHINE_RE.is_match(id)
}

/// Returns true if `name` is a valid application name.
///
/// Every hyphen-separated segment must contain a letter, so a name never
/// ends in `-<digits>` and cannot be confused with a flattened unit name.
pub fn is_valid_application(name: &str) -> bool {
    APPLICATION_RE.is_match(name)
}

/// Returns true if `name` is a valid unit name, e.g. `mysql/0`.
pub fn is_valid_unit(name: &str) -> bool {
    UNIT_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .is_some_and(|number| number.as_str().parse::<u32>().is_ok())
}

/// Returns true if `key` is a valid relation key: one endpoint for a peer
/// relation (`riak:ring`) or two joined by a space (`wordpress:db mysql:server`).
pub fn is_valid_relation(key: &str) -> bool {
    RELATION_RE.is_match(key)
}

/// Returns true if `uuid` is a valid environment id.
pub fn is_valid_environment(uuid: &str) -> bool {
    ENVIRONMENT_RE.is_match(uuid)
}

/// Returns true if `name` is a valid user name, optionally `@domain` qualified.
pub fn is_valid_user(name: &str) -> bool {
    USER_RE.is_match(name)
}

/// Returns true if `name` is a valid network name.
pub fn is_valid_network(name: &str) -> bool {
    NETWORK_RE.is_match(name)
}

/// A character that appears in canonical ids but is replaced in tag strings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Substitution {
    pub canonical: char,
    pub flat: char,
}

/// How a kind's canonical id maps onto the id part of its tag string.
///
/// For every valid id, `unflatten(flatten(id)) == id`. The grammars
/// guarantee this: either the flat character never occurs in a canonical id
/// (machine, relation), or only its last occurrence is substituted and the
/// canonical character occurs exactly once after it (unit).
///
/// A last-only flattening also accepts input that already holds its
/// canonical character exactly once, e.g. `dave/0` for a unit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Flattening {
    subs: &'static [Substitution],
    last_only: bool,
}

pub(crate) const IDENTITY: Flattening = Flattening {
    subs: &[],
    last_only: false,
};

pub(crate) const MACHINE: Flattening = Flattening {
    subs: &[Substitution {
        canonical: '/',
        flat: '-',
    }],
    last_only: false,
};

pub(crate) const UNIT: Flattening = Flattening {
    subs: &[Substitution {
        canonical: '/',
        flat: '-',
    }],
    last_only: true,
};

pub(crate) const RELATION: Flattening = Flattening {
    subs: &[
        Substitution {
            canonical: ':',
            flat: '.',
        },
        Substitution {
            canonical: ' ',
            flat: '#',
        },
    ],
    last_only: false,
};

impl Flattening {
    /// Renders a canonical id in its tag-string form.
    pub(crate) fn flatten<'a>(&self, id: &'a str) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(id);
        for sub in self.subs {
            if out.contains(sub.canonical) {
                out = Cow::Owned(out.replace(sub.canonical, &sub.flat.to_string()));
            }
        }
        out
    }

    /// Recovers the canonical id from its tag-string form.
    ///
    /// Returns `None` if the input already contains a canonical-only
    /// character (other than the single canonical separator a last-only
    /// substitution accepts), or lacks the separator it needs.
    /// The result still has to pass the kind's grammar.
    pub(crate) fn unflatten(&self, flat: &str) -> Option<String> {
        if self.last_only
            && self
                .subs
                .iter()
                .all(|sub| flat.matches(sub.canonical).count() == 1)
        {
            return Some(flat.to_string());
        }
        if self.subs.iter().any(|sub| flat.contains(sub.canonical)) {
            return None;
        }
        let mut out = flat.to_string();
        for sub in self.subs {
            if self.last_only {
                let idx = out.rfind(sub.flat)?;
                out.replace_range(idx..idx + sub.flat.len_utf8(), &sub.canonical.to_string());
            } else {
                out = out.replace(sub.flat, &sub.canonical.to_string());
            }
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_ids() {
        let cases = [
            ("0", true),
            ("10", true),
            ("10/lxc/1", true),
            ("1/lxc/0/kvm/3", true),
            ("", false),
            ("01", false),
            ("-1", false),
            ("10/lxc", false),
            ("10/lxc/01", false),
            ("10/LXC/1", false),
            ("10/lxc-1/1", false),
            ("10-lxc-1", false),
            ("foo", false),
        ];
        for (id, valid) in cases {
            assert_eq!(is_valid_machine(id), valid, "machine {id:?}");
        }
    }

    #[test]
    fn test_application_names() {
        let cases = [
            ("wordpress", true),
            ("rabbitmq-server", true),
            ("foo-bar", true),
            ("foo-t4", true),
            ("a1-2b", true),
            ("foo-55", false),
            ("foo-bar-2", false),
            ("20", false),
            ("Foo", false),
            ("foo-", false),
            ("-foo", false),
            ("foo--bar", false),
            ("foo_bar", false),
            ("", false),
        ];
        for (name, valid) in cases {
            assert_eq!(is_valid_application(name), valid, "application {name:?}");
        }
    }

    #[test]
    fn test_unit_names() {
        let cases = [
            ("wordpress/42", true),
            ("rabbitmq-server/123", true),
            ("foo-bar/123", true),
            ("foo-t4/5", true),
            ("foo", false),
            ("foo/", false),
            ("bar/foo", false),
            ("20/20", false),
            ("foo-55", false),
            ("foo-bar/123/", false),
            ("foo-bar/123-not", false),
            ("foo/01", false),
            ("foo/4294967295", true),
            ("foo/4294967296", false),
        ];
        for (name, valid) in cases {
            assert_eq!(is_valid_unit(name), valid, "unit {name:?}");
        }
    }

    #[test]
    fn test_relation_keys() {
        let cases = [
            ("riak:ring", true),
            ("wordpress:db mysql:server", true),
            ("wordpress:haproxy", true),
            ("foo-bar:my_rel-2", true),
            ("wordpress", false),
            ("wordpress:", false),
            (":db", false),
            ("wordpress:db  mysql:server", false),
            ("a:b c:d e:f", false),
            ("wordpress:Db", false),
            ("wordpress.db", false),
        ];
        for (key, valid) in cases {
            assert_eq!(is_valid_relation(key), valid, "relation {key:?}");
        }
    }

    #[test]
    fn test_user_names() {
        let cases = [
            ("admin", true),
            ("a", true),
            ("bob.smith+test", true),
            ("bob@local", true),
            ("bob@example.com", true),
            ("bob.", false),
            (".bob", false),
            ("bob@", false),
            ("bob@@local", false),
            ("bob smith", false),
            ("", false),
        ];
        for (name, valid) in cases {
            assert_eq!(is_valid_user(name), valid, "user {name:?}");
        }
    }

    #[test]
    fn test_network_and_environment_names() {
        assert!(is_valid_network("eth0"));
        assert!(is_valid_network("net_1-a"));
        assert!(!is_valid_network("eth0-"));
        assert!(!is_valid_network("eth 0"));
        assert!(!is_valid_network(""));

        assert!(is_valid_environment("local"));
        assert!(is_valid_environment("f47ac10b-58cc-4372-a567-0e02b2c3d479"));
        assert!(!is_valid_environment("-local"));
        assert!(!is_valid_environment("a/b"));
        assert!(!is_valid_environment(""));
    }

    #[test]
    fn test_flatten_machine() {
        assert_eq!(MACHINE.flatten("10/lxc/1"), "10-lxc-1");
        assert_eq!(MACHINE.unflatten("10-lxc-1").as_deref(), Some("10/lxc/1"));
        assert_eq!(MACHINE.unflatten("10/lxc/1"), None);
    }

    #[test]
    fn test_flatten_unit_substitutes_last_separator_only() {
        assert_eq!(UNIT.flatten("rabbitmq-server/1"), "rabbitmq-server-1");
        assert_eq!(
            UNIT.unflatten("rabbitmq-server-1").as_deref(),
            Some("rabbitmq-server/1")
        );
        assert_eq!(UNIT.unflatten("dave"), None);
        assert_eq!(UNIT.unflatten("dave/0").as_deref(), Some("dave/0"));
        assert_eq!(UNIT.unflatten("dave/0/1"), None);
    }

    #[test]
    fn test_flatten_relation() {
        assert_eq!(
            RELATION.flatten("wordpress:db mysql:server"),
            "wordpress.db#mysql.server"
        );
        assert_eq!(
            RELATION.unflatten("wordpress.db#mysql.server").as_deref(),
            Some("wordpress:db mysql:server")
        );
        assert_eq!(RELATION.unflatten("wordpress:db"), None);
    }

    #[test]
    fn test_identity_flattening_borrows() {
        assert!(matches!(IDENTITY.flatten("eth0"), Cow::Borrowed("eth0")));
        assert_eq!(IDENTITY.unflatten("a-b").as_deref(), Some("a-b"));
    }
}
