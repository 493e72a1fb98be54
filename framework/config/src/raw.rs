//! Environment variable names and the raw, string-keyed configuration view.

use std::collections::BTreeMap;
use std::env;

pub const TARGET_ENV: &str = "TARGET_ENV";
pub const SCENARIO_TYPE: &str = "K6_SCENARIO_TYPE";
pub const DURATION: &str = "K6_DURATION";
pub const ITERATIONS: &str = "K6_ITERATIONS";
pub const VUS: &str = "K6_VUS";
pub const RATE: &str = "K6_RATE";
pub const TIME_UNIT: &str = "K6_TIME_UNIT";
pub const RPS: &str = "K6_RPS";
pub const START_VUS: &str = "K6_START_VUS";
pub const PRE_ALLOCATED_VUS: &str = "K6_PRE_ALLOCATED_VUS";
pub const MAX_VUS: &str = "K6_MAX_VUS";
pub const STAGES_PARAM: &str = "K6_STAGES_PARAM";
pub const STAGES_JSON: &str = "K6_STAGES_JSON";
pub const STAGES: &str = "K6_STAGES";

/// Every configuration key read by the resolver.
///
/// The launcher scrubs these from the child environment before applying the
/// normalized map, so the engine only ever sees the fields relevant to the
/// active kind.
pub const KEYS: [&str; 14] = [
    TARGET_ENV,
    SCENARIO_TYPE,
    DURATION,
    ITERATIONS,
    VUS,
    RATE,
    TIME_UNIT,
    RPS,
    START_VUS,
    PRE_ALLOCATED_VUS,
    MAX_VUS,
    STAGES_PARAM,
    STAGES_JSON,
    STAGES,
];

/// Raw configuration as read from the process environment.
///
/// Values are kept as strings; all coercion happens when the raw view is
/// lifted into a [`crate::ResolvedConfig`].
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    values: BTreeMap<String, String>,
}

impl RawConfig {
    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        Self {
            values: env::vars().collect(),
        }
    }

    /// Look up a key, treating blank values the same as absent ones.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// The stages definition, taken from the first non-empty source among
    /// `K6_STAGES_PARAM`, `K6_STAGES_JSON` and `K6_STAGES`.
    pub fn stages_raw(&self) -> Option<&str> {
        self.get(STAGES_PARAM)
            .or_else(|| self.get(STAGES_JSON))
            .or_else(|| self.get(STAGES))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_treated_as_absent() {
        let raw: RawConfig = [(VUS, "  "), (RATE, "50")].into_iter().collect();

        assert_eq!(raw.get(VUS), None);
        assert_eq!(raw.get(RATE), Some("50"));
        assert_eq!(raw.get(DURATION), None);
    }

    #[test]
    fn first_non_empty_stages_source_wins() {
        let raw: RawConfig = [(STAGES_JSON, "[]"), (STAGES, "ignored")]
            .into_iter()
            .collect();
        assert_eq!(raw.stages_raw(), Some("[]"));

        let raw: RawConfig = [(STAGES_PARAM, ""), (STAGES, "[1]")].into_iter().collect();
        assert_eq!(raw.stages_raw(), Some("[1]"));
    }
}
