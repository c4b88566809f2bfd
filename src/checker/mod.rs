pub mod report;
pub mod storage;

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::boolexpr::{EvalError, Node, ParseError};

pub use report::{Report, ReportSummary};

/// Errors from deciding a single license expression.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// No decision has been recorded for a license the expression needs.
    #[error("unknown license '{variable}' in '{license}'")]
    UnknownLicense { license: String, variable: String },

    #[error("failed to parse license '{license}'")]
    Parse {
        license: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to solve license '{license}'")]
    Solve {
        license: String,
        #[source]
        source: EvalError,
    },
}

/// What a failed check means when licenses without a decision are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// List them in the report; only disallowed licenses fail the check.
    Report,
    /// Treat them like disallowed licenses.
    Deny,
}

/// Decides whether license expressions are allowed, based on a set of
/// per-license decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseChecker {
    decisions: BTreeMap<String, bool>,
}

impl LicenseChecker {
    pub fn from_map(decisions: impl IntoIterator<Item = (String, bool)>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
        }
    }

    /// Licenses present in both lists end up disallowed.
    pub fn from_lists<A, D>(allowed: A, disallowed: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let mut decisions = BTreeMap::new();
        for license in allowed {
            decisions.insert(license.into(), true);
        }
        for license in disallowed {
            decisions.insert(license.into(), false);
        }
        Self { decisions }
    }

    pub fn decisions(&self) -> &BTreeMap<String, bool> {
        &self.decisions
    }

    /// Records a decision, replacing any earlier one for the same license.
    pub fn update(&mut self, license: impl Into<String>, allowed: bool) {
        self.decisions.insert(license.into(), allowed);
    }

    pub fn is_license_allowed(&self, license: &str) -> Result<bool, CheckError> {
        let node = parse_license(license)?;

        node.solve(&self.decisions).map_err(|source| match source.unknown_variable() {
            Some(variable) => CheckError::UnknownLicense {
                license: license.to_string(),
                variable: variable.to_string(),
            },
            None => CheckError::Solve {
                license: license.to_string(),
                source,
            },
        })
    }

    /// Every license named in the expression that has no decision yet, in
    /// order of appearance.
    pub fn undecided_licenses(&self, license: &str) -> Result<Vec<String>, CheckError> {
        let node = parse_license(license)?;

        Ok(node
            .variables()
            .into_iter()
            .filter(|name| !self.decisions.contains_key(*name))
            .map(str::to_string)
            .collect())
    }

    /// Checks the license of every dependency. Licenses without a decision
    /// are collected in the report; any other failure aborts the check.
    pub fn validate_current_licenses(
        &self,
        current_licenses: &IndexMap<String, String>,
    ) -> Result<Report, CheckError> {
        let mut report = Report::default();

        for (dependency, license) in current_licenses {
            log::debug!("Checking license '{license}' of dependency '{dependency}'");

            match self.is_license_allowed(license) {
                Ok(allowed) => report.record_decision(license, dependency, allowed),
                Err(CheckError::UnknownLicense { variable, .. }) => {
                    log::debug!("No decision for '{variable}', needed by '{dependency}'");
                    report.record_unknown(license, dependency);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}

fn parse_license(license: &str) -> Result<Node, CheckError> {
    Node::parse(license).map_err(|source| CheckError::Parse {
        license: license.to_string(),
        source,
    })
}
