use crate::error::Error;

/// Databricks workspace organization id, the `<org>` in `adb-<org>.azuredatabricks.net`.
pub const ENV_ORG_ID: &str = "ADB_ORG_ID";
/// Azure Resource Manager id of the Databricks workspace.
pub const ENV_RESOURCE_ID: &str = "ADB_RESOURCE_ID";

/// Workspace identifiers, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub org_id: String,
    pub resource_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Config {
            org_id: require(ENV_ORG_ID)?,
            resource_id: require(ENV_RESOURCE_ID)?,
        })
    }
}

// An empty value would degenerate the workspace URL to
// `https://adb-.azuredatabricks.net`, so treat it the same as unset.
fn require(variable: &'static str) -> Result<String, Error> {
    match std::env::var(variable) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingConfiguration { variable }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reads_set_variable() {
        std::env::set_var("GETCLUSTER_TEST_SET", "adb-workspace");
        assert_eq!(require("GETCLUSTER_TEST_SET").unwrap(), "adb-workspace");
    }

    #[test]
    fn require_rejects_unset_variable() {
        std::env::remove_var("GETCLUSTER_TEST_UNSET");
        let err = require("GETCLUSTER_TEST_UNSET").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingConfiguration {
                variable: "GETCLUSTER_TEST_UNSET"
            }
        ));
    }

    #[test]
    fn require_rejects_empty_variable() {
        std::env::set_var("GETCLUSTER_TEST_EMPTY", "");
        let err = require("GETCLUSTER_TEST_EMPTY").unwrap_err();
        assert!(matches!(err, Error::MissingConfiguration { .. }));
    }
}
