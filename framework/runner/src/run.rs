use std::process::Command;

use anyhow::Context;
use k6_scenario_config::{raw, ConfigError, RawConfig, ResolvedConfig, ScenarioPlan};

use crate::cli::LauncherCli;
use crate::k6_binary::k6_path;
use crate::summary::log_summary;
use crate::types::LauncherResult;

/// Resolve the scenario configuration from the process environment and launch
/// k6 against the given script.
///
/// Returns the exit code of the k6 process unchanged. Configuration and
/// validation faults are returned as errors and never spawn the engine.
pub fn run(cli: LauncherCli) -> LauncherResult<i32> {
    if !cli.script.is_file() {
        return Err(ConfigError::ScriptNotFound {
            path: cli.script.clone(),
        }
        .into());
    }

    let raw = RawConfig::from_env();
    let config = ResolvedConfig::parse(&raw)?;
    let plan = ScenarioPlan::from_config(&config)?;
    let args = plan.engine_args();
    log_summary(&config, &plan, &args);

    let k6 = k6_path()?;
    log::info!("Launching {} run {}", k6.display(), cli.script.display());
    let mut command = Command::new(&k6);
    command.arg("run").args(&args).arg(&cli.script);
    // Scrub every configuration key from the inherited environment so the
    // engine only sees the normalized map; ignored fields must not leak.
    for key in raw::KEYS {
        command.env_remove(key);
    }
    let status = command
        .envs(plan.environment())
        .status()
        .with_context(|| format!("Failed to execute '{} run'", k6.display()))?;

    // A child killed by a signal has no exit code to propagate.
    Ok(status.code().unwrap_or(1))
}
