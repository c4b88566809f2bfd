use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::UnknownPolicy;

/// Outcome of checking a set of dependencies, grouped by license
/// expression. Each map goes from license to the dependencies using it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub allowed: IndexMap<String, Vec<String>>,
    pub disallowed: IndexMap<String, Vec<String>>,
    pub unknown: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_dependencies: usize,
    pub allowed: usize,
    pub disallowed: usize,
    pub unknown: usize,
}

impl Report {
    pub fn record_decision(&mut self, license: &str, dependency: &str, allowed: bool) {
        if allowed {
            self.record_allowed(license, dependency);
        } else {
            self.record_disallowed(license, dependency);
        }
    }

    pub fn record_allowed(&mut self, license: &str, dependency: &str) {
        record(&mut self.allowed, license, dependency);
    }

    pub fn record_disallowed(&mut self, license: &str, dependency: &str) {
        record(&mut self.disallowed, license, dependency);
    }

    pub fn record_unknown(&mut self, license: &str, dependency: &str) {
        record(&mut self.unknown, license, dependency);
    }

    pub fn has_disallowed_licenses(&self) -> bool {
        !self.disallowed.is_empty()
    }

    pub fn has_unknown_licenses(&self) -> bool {
        !self.unknown.is_empty()
    }

    /// Whether the check should fail under the given policy.
    pub fn is_failure(&self, policy: UnknownPolicy) -> bool {
        self.has_disallowed_licenses() || (policy == UnknownPolicy::Deny && self.has_unknown_licenses())
    }

    pub fn summary(&self) -> ReportSummary {
        let count = |map: &IndexMap<String, Vec<String>>| map.values().map(Vec::len).sum::<usize>();

        let allowed = count(&self.allowed);
        let disallowed = count(&self.disallowed);
        let unknown = count(&self.unknown);

        ReportSummary {
            total_dependencies: allowed + disallowed + unknown,
            allowed,
            disallowed,
            unknown,
        }
    }
}

fn record(map: &mut IndexMap<String, Vec<String>>, license: &str, dependency: &str) {
    map.entry(license.to_string()).or_default().push(dependency.to_string());
}
