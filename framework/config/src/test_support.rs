//! Shared fixtures for the unit tests in this crate.

use crate::resolved::{ResolvedConfig, DEFAULT_TARGET_ENV};
use crate::scenario::ScenarioKind;
use crate::stages::Stage;
use crate::toggle::Toggle;

/// A configuration carrying exactly the fields the given kind requires.
pub(crate) fn minimal_config(kind: ScenarioKind) -> ResolvedConfig {
    let mut config = ResolvedConfig {
        target_env: DEFAULT_TARGET_ENV.to_string(),
        kind,
        duration: Toggle::Disabled,
        time_unit: Toggle::Disabled,
        iterations: 0,
        vus: 0,
        rate: 0,
        rps: 0,
        start_vus: 0,
        pre_allocated_vus: 0,
        max_vus: 0,
        stages: Vec::new(),
    };

    let stages = vec![
        Stage {
            duration: "30s".to_string(),
            target: 10,
        },
        Stage {
            duration: "1m".to_string(),
            target: 0,
        },
    ];

    match kind {
        ScenarioKind::Manual => {
            config.vus = 2;
            config.iterations = 10;
        }
        ScenarioKind::SharedIterations | ScenarioKind::PerVuIterations => {
            config.vus = 2;
            config.iterations = 10;
        }
        ScenarioKind::ConstantVus => {
            config.vus = 2;
            config.duration = Toggle::Enabled("5m".to_string());
        }
        ScenarioKind::RampingVus => {
            config.start_vus = 1;
            config.stages = stages;
        }
        ScenarioKind::ConstantArrivalRate => {
            config.rate = 50;
            config.time_unit = Toggle::Enabled("1s".to_string());
            config.duration = Toggle::Enabled("10m".to_string());
            config.pre_allocated_vus = 20;
            config.max_vus = 40;
        }
        ScenarioKind::RampingArrivalRate => {
            config.stages = stages;
            config.time_unit = Toggle::Enabled("1s".to_string());
            config.pre_allocated_vus = 20;
            config.max_vus = 40;
        }
    }

    config
}
