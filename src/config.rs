//! Run configuration.
//!
//! Everything an importer needs to name its tables travels in an explicit
//! [`RunConfig`] built once at startup; nothing is read from ambient state
//! after that.

use std::env;

/// Default project name prefixed to table names.
pub const DEFAULT_PROJECT: &str = "PICOL";

/// Environment variable consulted when `--environment` is not given.
pub const ENVIRONMENT_VAR: &str = "PICOL_ENV";

const SEQUENCES_TABLE_SUFFIX: &str = "Sequences";

/// Resolved per-run configuration shared by all importers.
///
/// The table prefix is the concatenation of the extra `--table-prefix`
/// value, the project name, and the environment name, in that order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunConfig {
    table_prefix: String,
}

impl RunConfig {
    /// Compose the table prefix from its three parts.
    pub fn new(table_prefix: &str, project: &str, environment: &str) -> Self {
        Self {
            table_prefix: format!("{table_prefix}{project}{environment}"),
        }
    }

    /// The full table name for an entity table suffix such as `"Crops"`.
    pub fn table_name(&self, suffix: &str) -> String {
        format!("{}{}", self.table_prefix, suffix)
    }

    /// The name of the sequences table.
    pub fn sequences_table(&self) -> String {
        self.table_name(SEQUENCES_TABLE_SUFFIX)
    }

    /// The sequence name for an entity table suffix, e.g. `"Crops"` becomes
    /// `"{prefix}Crops.Id"`.
    pub fn sequence_name(&self, suffix: &str) -> String {
        format!("{}{}.Id", self.table_prefix, suffix)
    }
}

/// Resolve the environment name.
///
/// An explicit flag value is used verbatim. Otherwise the value comes from
/// the `PICOL_ENV` environment variable, falling back to `"dev"`, and is
/// title-cased.
pub fn resolve_environment(flag: Option<&str>) -> String {
    match flag {
        Some(environment) if !environment.is_empty() => environment.to_string(),
        _ => title_case(&env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "dev".to_string())),
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
