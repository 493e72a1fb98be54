use std::path::PathBuf;

use crate::raw;
use crate::scenario::ScenarioKind;
use crate::validate::ValidationError;

/// Fatal configuration faults. Everything here stops the run before the k6
/// process is spawned; the only recovered fault is malformed stages JSON,
/// which [`crate::parse_stages`] downgrades to a warning.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {}", raw::SCENARIO_TYPE)]
    MissingScenarioType,

    #[error(
        "unsupported scenario type {value:?}, expected one of: {}",
        ScenarioKind::valid_set()
    )]
    UnsupportedScenarioType { value: String },

    #[error(
        "scenario \"{kind}\" configuration has {} validation error(s):\n{}",
        .errors.len(),
        format_errors(.errors)
    )]
    Invalid {
        kind: ScenarioKind,
        errors: Vec<ValidationError>,
    },

    #[error("script not found at {}", .path.display())]
    ScriptNotFound { path: PathBuf },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(index, error)| format!("  {}. {error}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
