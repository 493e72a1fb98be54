/// Result type used throughout the launcher. Configuration faults are carried
/// as [`k6_scenario_config::ConfigError`] values inside the `anyhow` error so
/// callers can still match on the specific kind.
pub type LauncherResult<T> = anyhow::Result<T>;
