use crate::error::ConfigError;
use crate::raw::{self, RawConfig};
use crate::scenario::ScenarioKind;
use crate::stages::{parse_stages, Stage};
use crate::toggle::Toggle;

/// The environment used when `TARGET_ENV` is not set.
pub const DEFAULT_TARGET_ENV: &str = "uat";

/// Typed, normalized form of the raw environment configuration.
///
/// Derived once at startup and immutable thereafter. Numeric fields coerce to
/// zero when absent or non-numeric; which fields are actually meaningful is
/// decided by [`crate::validate`] based on the scenario kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub target_env: String,
    pub kind: ScenarioKind,
    pub duration: Toggle,
    pub time_unit: Toggle,
    pub iterations: u32,
    pub vus: u32,
    pub rate: u32,
    pub rps: u32,
    pub start_vus: u32,
    pub pre_allocated_vus: u32,
    pub max_vus: u32,
    pub stages: Vec<Stage>,
}

impl ResolvedConfig {
    /// Lift the raw environment into its typed form.
    ///
    /// Fails only on a missing or unrecognized scenario type; all other rule
    /// checking is deferred to [`crate::validate`] so that every violation can
    /// be reported together.
    pub fn parse(config: &RawConfig) -> Result<Self, ConfigError> {
        let kind: ScenarioKind = config
            .get(raw::SCENARIO_TYPE)
            .ok_or(ConfigError::MissingScenarioType)?
            .parse()?;

        Ok(Self {
            target_env: config
                .get(raw::TARGET_ENV)
                .unwrap_or(DEFAULT_TARGET_ENV)
                .to_string(),
            kind,
            duration: Toggle::parse(config.get(raw::DURATION)),
            time_unit: Toggle::parse(config.get(raw::TIME_UNIT)),
            iterations: numeric(config.get(raw::ITERATIONS)),
            vus: numeric(config.get(raw::VUS)),
            rate: numeric(config.get(raw::RATE)),
            rps: numeric(config.get(raw::RPS)),
            start_vus: numeric(config.get(raw::START_VUS)),
            pre_allocated_vus: numeric(config.get(raw::PRE_ALLOCATED_VUS)),
            max_vus: numeric(config.get(raw::MAX_VUS)),
            stages: parse_stages(config.stages_raw()),
        })
    }
}

fn numeric(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}
