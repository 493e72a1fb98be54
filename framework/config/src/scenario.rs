use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The k6 executor requested for a run.
///
/// Exactly one kind is active per run and it determines which configuration
/// fields are meaningful. `manual` means no executor block is generated and
/// the engine is driven by plain `--vus`/`--iterations`/`--duration` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    Manual,
    SharedIterations,
    PerVuIterations,
    ConstantVus,
    RampingVus,
    ConstantArrivalRate,
    RampingArrivalRate,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 7] = [
        ScenarioKind::Manual,
        ScenarioKind::SharedIterations,
        ScenarioKind::PerVuIterations,
        ScenarioKind::ConstantVus,
        ScenarioKind::RampingVus,
        ScenarioKind::ConstantArrivalRate,
        ScenarioKind::RampingArrivalRate,
    ];

    /// The canonical spelling, as accepted by `K6_SCENARIO_TYPE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::Manual => "manual",
            ScenarioKind::SharedIterations => "shared-iterations",
            ScenarioKind::PerVuIterations => "per-vu-iterations",
            ScenarioKind::ConstantVus => "constant-vus",
            ScenarioKind::RampingVus => "ramping-vus",
            ScenarioKind::ConstantArrivalRate => "constant-arrival-rate",
            ScenarioKind::RampingArrivalRate => "ramping-arrival-rate",
        }
    }

    /// Comma-separated list of every accepted canonical kind, for error messages.
    pub fn valid_set() -> String {
        Self::ALL
            .iter()
            .map(ScenarioKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn iteration_based(&self) -> bool {
        matches!(
            self,
            ScenarioKind::SharedIterations | ScenarioKind::PerVuIterations
        )
    }

    pub(crate) fn arrival_rate(&self) -> bool {
        matches!(
            self,
            ScenarioKind::ConstantArrivalRate | ScenarioKind::RampingArrivalRate
        )
    }

    pub(crate) fn ramping(&self) -> bool {
        matches!(
            self,
            ScenarioKind::RampingVus | ScenarioKind::RampingArrivalRate
        )
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = ConfigError;

    /// Case-insensitive; whitespace and underscore runs normalize to `-` and
    /// the compact aliases (`sharediterations`, ...) are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = canonicalize(s);
        match canonical.as_str() {
            "" => Err(ConfigError::MissingScenarioType),
            "manual" | "none" => Ok(ScenarioKind::Manual),
            "shared-iterations" | "sharediterations" => Ok(ScenarioKind::SharedIterations),
            "per-vu-iterations" | "pervuiterations" => Ok(ScenarioKind::PerVuIterations),
            "constant-vus" | "constantvus" => Ok(ScenarioKind::ConstantVus),
            "ramping-vus" | "rampingvus" => Ok(ScenarioKind::RampingVus),
            "constant-arrival-rate" | "constantarrivalrate" => {
                Ok(ScenarioKind::ConstantArrivalRate)
            }
            "ramping-arrival-rate" | "rampingarrivalrate" => Ok(ScenarioKind::RampingArrivalRate),
            _ => Err(ConfigError::UnsupportedScenarioType {
                value: s.trim().to_string(),
            }),
        }
    }
}

fn canonicalize(s: &str) -> String {
    let mut canonical = String::with_capacity(s.len());
    for c in s.trim().chars() {
        if c.is_whitespace() || c == '_' {
            if !canonical.ends_with('-') {
                canonical.push('-');
            }
        } else {
            canonical.extend(c.to_lowercase());
        }
    }
    canonical
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_canonical_spellings() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.as_str().parse::<ScenarioKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parsing_is_case_and_separator_insensitive() {
        assert_eq!(
            "Constant_Arrival_Rate".parse::<ScenarioKind>().unwrap(),
            ScenarioKind::ConstantArrivalRate
        );
        assert_eq!(
            " shared iterations ".parse::<ScenarioKind>().unwrap(),
            ScenarioKind::SharedIterations
        );
        assert_eq!(
            "rampingvus".parse::<ScenarioKind>().unwrap(),
            ScenarioKind::RampingVus
        );
        assert_eq!(
            "none".parse::<ScenarioKind>().unwrap(),
            ScenarioKind::Manual
        );
    }

    #[test]
    fn unknown_kind_error_enumerates_the_valid_set() {
        let err = "spike".parse::<ScenarioKind>().unwrap_err();
        let message = err.to_string();

        assert!(message.contains("spike"));
        for kind in ScenarioKind::ALL {
            assert!(
                message.contains(kind.as_str()),
                "{message} should mention {kind}"
            );
        }
    }

    #[test]
    fn blank_kind_is_missing_not_unsupported() {
        let err = "   ".parse::<ScenarioKind>().unwrap_err();
        assert!(matches!(err, ConfigError::MissingScenarioType));
    }
}
