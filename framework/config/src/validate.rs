use crate::raw;
use crate::resolved::ResolvedConfig;
use crate::scenario::ScenarioKind;
use crate::stages::Stage;
use crate::toggle::Toggle;

/// One violated rule from the per-kind requirement table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("scenario \"{kind}\" requires {field} {requirement}")]
    MissingRequiredField {
        kind: ScenarioKind,
        field: &'static str,
        requirement: &'static str,
    },

    #[error("scenario \"{kind}\" is incompatible with {field}: {detail}")]
    IncompatibleParameter {
        kind: ScenarioKind,
        field: &'static str,
        detail: &'static str,
    },

    #[error(
        "scenario \"{kind}\" requires {max} ({max_vus}) to be greater than or equal to {pre} ({pre_allocated_vus})",
        max = raw::MAX_VUS,
        pre = raw::PRE_ALLOCATED_VUS
    )]
    PoolBounds {
        kind: ScenarioKind,
        max_vus: u32,
        pre_allocated_vus: u32,
    },
}

/// The outcome of checking a [`ResolvedConfig`] against the requirement table.
///
/// `errors` empty means the configuration is valid. `ignored` lists fields
/// that are set but meaningless for the active kind; they are surfaced as
/// warnings, never as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub ignored: Vec<&'static str>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check every rule for the active scenario kind, collecting all violations.
pub fn validate(config: &ResolvedConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    let kind = config.kind;

    match kind {
        ScenarioKind::Manual => {
            require_positive(&mut report, kind, raw::VUS, config.vus);
            if config.iterations == 0 && !config.duration.enabled() {
                report.errors.push(ValidationError::MissingRequiredField {
                    kind,
                    field: "K6_ITERATIONS or K6_DURATION",
                    requirement: "to set either a positive iteration count or an enabled duration",
                });
            }
        }
        ScenarioKind::SharedIterations | ScenarioKind::PerVuIterations => {
            require_positive(&mut report, kind, raw::ITERATIONS, config.iterations);
            require_positive(&mut report, kind, raw::VUS, config.vus);
        }
        ScenarioKind::ConstantVus => {
            require_positive(&mut report, kind, raw::VUS, config.vus);
            require_enabled(&mut report, kind, raw::DURATION, &config.duration);
            if config.iterations > 0 {
                report.errors.push(ValidationError::IncompatibleParameter {
                    kind,
                    field: raw::ITERATIONS,
                    detail: "a fixed iteration count cannot be combined with a constant-vus run",
                });
            }
        }
        ScenarioKind::RampingVus => {
            require_positive(&mut report, kind, raw::START_VUS, config.start_vus);
            require_stages(&mut report, kind, &config.stages);
        }
        ScenarioKind::ConstantArrivalRate => {
            require_positive(&mut report, kind, raw::RATE, config.rate);
            require_enabled(&mut report, kind, raw::TIME_UNIT, &config.time_unit);
            require_enabled(&mut report, kind, raw::DURATION, &config.duration);
            require_positive(
                &mut report,
                kind,
                raw::PRE_ALLOCATED_VUS,
                config.pre_allocated_vus,
            );
            check_pool_bounds(&mut report, config);
        }
        ScenarioKind::RampingArrivalRate => {
            require_stages(&mut report, kind, &config.stages);
            require_enabled(&mut report, kind, raw::TIME_UNIT, &config.time_unit);
            require_positive(
                &mut report,
                kind,
                raw::PRE_ALLOCATED_VUS,
                config.pre_allocated_vus,
            );
            require_positive(&mut report, kind, raw::MAX_VUS, config.max_vus);
            check_pool_bounds(&mut report, config);
        }
    }

    // An iteration count is an error for kinds it cannot drive; constant-vus
    // reports it from its own rule above.
    let iterations_allowed =
        kind == ScenarioKind::Manual || kind.iteration_based() || kind == ScenarioKind::ConstantVus;
    if config.iterations > 0 && !iterations_allowed {
        report.errors.push(ValidationError::IncompatibleParameter {
            kind,
            field: raw::ITERATIONS,
            detail: "iteration counts only apply to manual and iteration-based scenarios",
        });
    }

    if !kind.arrival_rate() {
        if config.rate > 0 {
            report.ignored.push(raw::RATE);
        }
        if config.time_unit.enabled() {
            report.ignored.push(raw::TIME_UNIT);
        }
        if config.pre_allocated_vus > 0 {
            report.ignored.push(raw::PRE_ALLOCATED_VUS);
        }
        if config.max_vus > 0 {
            report.ignored.push(raw::MAX_VUS);
        }
    }
    if !kind.ramping() && !config.stages.is_empty() {
        report.ignored.push(raw::STAGES);
    }

    report
}

fn require_positive(
    report: &mut ValidationReport,
    kind: ScenarioKind,
    field: &'static str,
    value: u32,
) {
    if value == 0 {
        report.errors.push(ValidationError::MissingRequiredField {
            kind,
            field,
            requirement: "to be a positive number",
        });
    }
}

fn require_enabled(
    report: &mut ValidationReport,
    kind: ScenarioKind,
    field: &'static str,
    toggle: &Toggle,
) {
    if !toggle.enabled() {
        report.errors.push(ValidationError::MissingRequiredField {
            kind,
            field,
            requirement: "to be set",
        });
    }
}

fn require_stages(report: &mut ValidationReport, kind: ScenarioKind, stages: &[Stage]) {
    if stages.is_empty() {
        report.errors.push(ValidationError::MissingRequiredField {
            kind,
            field: raw::STAGES,
            requirement: "to define at least one stage",
        });
    }
}

fn check_pool_bounds(report: &mut ValidationReport, config: &ResolvedConfig) {
    if config.max_vus > 0 && config.max_vus < config.pre_allocated_vus {
        report.errors.push(ValidationError::PoolBounds {
            kind: config.kind,
            max_vus: config.max_vus,
            pre_allocated_vus: config.pre_allocated_vus,
        });
    }
}
