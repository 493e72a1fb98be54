use k6_scenario_config::{ResolvedConfig, ScenarioPlan};

/// Log a human-readable summary of the resolved scenario before launch.
/// The format is informational only.
pub(crate) fn log_summary(config: &ResolvedConfig, plan: &ScenarioPlan, args: &[String]) {
    log::info!(
        "Scenario \"{}\" targeting environment \"{}\"",
        config.kind,
        config.target_env
    );
    for (key, value) in plan.environment() {
        log::info!("  {key}={value}");
    }
    log::info!("Engine arguments: {}", args.join(" "));
}
