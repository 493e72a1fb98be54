use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::raw;
use crate::resolved::ResolvedConfig;
use crate::scenario::ScenarioKind;
use crate::stages::Stage;
use crate::toggle::Toggle;
use crate::validate::validate;

/// Executor settings for one scenario kind.
///
/// Each variant carries only the fields meaningful to its kind, so an illegal
/// field combination cannot be represented once validation has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Executor {
    Manual {
        vus: u32,
        iterations: u32,
        duration: Toggle,
    },
    SharedIterations {
        vus: u32,
        iterations: u32,
        duration: Toggle,
    },
    PerVuIterations {
        vus: u32,
        iterations: u32,
        duration: Toggle,
    },
    ConstantVus {
        vus: u32,
        duration: String,
    },
    RampingVus {
        start_vus: u32,
        stages: Vec<Stage>,
    },
    ConstantArrivalRate {
        rate: u32,
        time_unit: String,
        duration: String,
        pre_allocated_vus: u32,
        max_vus: u32,
    },
    RampingArrivalRate {
        stages: Vec<Stage>,
        time_unit: String,
        pre_allocated_vus: u32,
        max_vus: u32,
    },
}

/// A validated launch plan: the executor plus the run-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioPlan {
    pub target_env: String,
    pub rps: u32,
    pub executor: Executor,
}

impl ScenarioPlan {
    /// Validate `config` and lift it into a plan.
    ///
    /// Every rule violation is collected into a single
    /// [`ConfigError::Invalid`]; ignored parameters are logged as warnings
    /// and dropped from the plan.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        let report = validate(config);
        for field in &report.ignored {
            log::warn!(
                "Ignoring {field}: it is not used by the \"{}\" scenario",
                config.kind
            );
        }
        if !report.is_valid() {
            return Err(ConfigError::Invalid {
                kind: config.kind,
                errors: report.errors,
            });
        }

        let executor = match config.kind {
            ScenarioKind::Manual => Executor::Manual {
                vus: config.vus,
                iterations: config.iterations,
                duration: config.duration.clone(),
            },
            ScenarioKind::SharedIterations => Executor::SharedIterations {
                vus: config.vus,
                iterations: config.iterations,
                duration: config.duration.clone(),
            },
            ScenarioKind::PerVuIterations => Executor::PerVuIterations {
                vus: config.vus,
                iterations: config.iterations,
                duration: config.duration.clone(),
            },
            ScenarioKind::ConstantVus => Executor::ConstantVus {
                vus: config.vus,
                duration: enabled_value(&config.duration),
            },
            ScenarioKind::RampingVus => Executor::RampingVus {
                start_vus: config.start_vus,
                stages: config.stages.clone(),
            },
            ScenarioKind::ConstantArrivalRate => Executor::ConstantArrivalRate {
                rate: config.rate,
                time_unit: enabled_value(&config.time_unit),
                duration: enabled_value(&config.duration),
                pre_allocated_vus: config.pre_allocated_vus,
                max_vus: config.max_vus,
            },
            ScenarioKind::RampingArrivalRate => Executor::RampingArrivalRate {
                stages: config.stages.clone(),
                time_unit: enabled_value(&config.time_unit),
                pre_allocated_vus: config.pre_allocated_vus,
                max_vus: config.max_vus,
            },
        };

        Ok(Self {
            target_env: config.target_env.clone(),
            rps: config.rps,
            executor,
        })
    }

    pub fn kind(&self) -> ScenarioKind {
        match self.executor {
            Executor::Manual { .. } => ScenarioKind::Manual,
            Executor::SharedIterations { .. } => ScenarioKind::SharedIterations,
            Executor::PerVuIterations { .. } => ScenarioKind::PerVuIterations,
            Executor::ConstantVus { .. } => ScenarioKind::ConstantVus,
            Executor::RampingVus { .. } => ScenarioKind::RampingVus,
            Executor::ConstantArrivalRate { .. } => ScenarioKind::ConstantArrivalRate,
            Executor::RampingArrivalRate { .. } => ScenarioKind::RampingArrivalRate,
        }
    }

    /// The normalized environment for the k6 process.
    ///
    /// Only the fields relevant to the active kind are serialized; re-parsing
    /// this map yields a [`ResolvedConfig`] equal to the one the plan was
    /// built from.
    pub fn environment(&self) -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();
        env.insert(raw::TARGET_ENV.to_string(), self.target_env.clone());
        env.insert(raw::SCENARIO_TYPE.to_string(), self.kind().to_string());
        insert_positive(&mut env, raw::RPS, self.rps);

        match &self.executor {
            Executor::Manual {
                vus,
                iterations,
                duration,
            }
            | Executor::SharedIterations {
                vus,
                iterations,
                duration,
            }
            | Executor::PerVuIterations {
                vus,
                iterations,
                duration,
            } => {
                insert_positive(&mut env, raw::VUS, *vus);
                insert_positive(&mut env, raw::ITERATIONS, *iterations);
                if let Some(value) = duration.value() {
                    env.insert(raw::DURATION.to_string(), value.to_string());
                }
            }
            Executor::ConstantVus { vus, duration } => {
                insert_positive(&mut env, raw::VUS, *vus);
                env.insert(raw::DURATION.to_string(), duration.clone());
            }
            Executor::RampingVus { start_vus, stages } => {
                insert_positive(&mut env, raw::START_VUS, *start_vus);
                insert_stages(&mut env, stages);
            }
            Executor::ConstantArrivalRate {
                rate,
                time_unit,
                duration,
                pre_allocated_vus,
                max_vus,
            } => {
                insert_positive(&mut env, raw::RATE, *rate);
                env.insert(raw::TIME_UNIT.to_string(), time_unit.clone());
                env.insert(raw::DURATION.to_string(), duration.clone());
                insert_positive(&mut env, raw::PRE_ALLOCATED_VUS, *pre_allocated_vus);
                insert_positive(&mut env, raw::MAX_VUS, *max_vus);
            }
            Executor::RampingArrivalRate {
                stages,
                time_unit,
                pre_allocated_vus,
                max_vus,
            } => {
                insert_stages(&mut env, stages);
                env.insert(raw::TIME_UNIT.to_string(), time_unit.clone());
                insert_positive(&mut env, raw::PRE_ALLOCATED_VUS, *pre_allocated_vus);
                insert_positive(&mut env, raw::MAX_VUS, *max_vus);
            }
        }

        env
    }

    /// The ordered flag list for the k6 invocation: tag, duration, vus,
    /// iterations, rps, then one `--stage` per ramp segment in declaration
    /// order. Arrival-rate settings travel in the environment only.
    pub fn engine_args(&self) -> Vec<String> {
        let mut args = vec![
            "--tag".to_string(),
            format!("environment={}", self.target_env),
        ];
        if let Some(duration) = self.duration() {
            args.push("--duration".to_string());
            args.push(duration.to_string());
        }
        if let Some(vus) = self.vus() {
            args.push("--vus".to_string());
            args.push(vus.to_string());
        }
        if let Some(iterations) = self.iterations() {
            args.push("--iterations".to_string());
            args.push(iterations.to_string());
        }
        if self.rps > 0 {
            args.push("--rps".to_string());
            args.push(self.rps.to_string());
        }
        for stage in self.stages() {
            args.push("--stage".to_string());
            args.push(stage.flag_value());
        }
        args
    }

    fn duration(&self) -> Option<&str> {
        match &self.executor {
            Executor::Manual { duration, .. }
            | Executor::SharedIterations { duration, .. }
            | Executor::PerVuIterations { duration, .. } => duration.value(),
            Executor::ConstantVus { duration, .. }
            | Executor::ConstantArrivalRate { duration, .. } => Some(duration),
            _ => None,
        }
    }

    fn vus(&self) -> Option<u32> {
        match &self.executor {
            Executor::Manual { vus, .. }
            | Executor::SharedIterations { vus, .. }
            | Executor::PerVuIterations { vus, .. }
            | Executor::ConstantVus { vus, .. } => Some(*vus).filter(|vus| *vus > 0),
            _ => None,
        }
    }

    fn iterations(&self) -> Option<u32> {
        match &self.executor {
            Executor::Manual { iterations, .. }
            | Executor::SharedIterations { iterations, .. }
            | Executor::PerVuIterations { iterations, .. } => {
                Some(*iterations).filter(|iterations| *iterations > 0)
            }
            _ => None,
        }
    }

    fn stages(&self) -> &[Stage] {
        match &self.executor {
            Executor::RampingVus { stages, .. } | Executor::RampingArrivalRate { stages, .. } => {
                stages
            }
            _ => &[],
        }
    }
}

// Only reached once validation has passed, so the toggle is always enabled.
fn enabled_value(toggle: &Toggle) -> String {
    toggle
        .value()
        .expect("duration/time_unit validated as enabled")
        .to_string()
}

fn insert_positive(env: &mut BTreeMap<String, String>, key: &str, value: u32) {
    if value > 0 {
        env.insert(key.to_string(), value.to_string());
    }
}

fn insert_stages(env: &mut BTreeMap<String, String>, stages: &[Stage]) {
    if stages.is_empty() {
        return;
    }
    let json = serde_json::to_string(stages).expect("stage list serialization cannot fail");
    env.insert(raw::STAGES.to_string(), json);
}
