use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

use k6_scenario_config::ConfigError;
use k6_scenario_runner::prelude::{run, LauncherCli, K6_PATH_ENV};
use tempfile::TempDir;

/// Run `f` with the given environment variables set, removing them afterwards.
/// Serialized because the process environment is shared between test threads.
fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
    static LOCK: Mutex<()> = Mutex::new(());
    let _guard = LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for (key, value) in vars {
        env::set_var(key, value);
    }
    f();
    for (key, _) in vars {
        env::remove_var(key);
    }
}

fn write_script(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("scenario.js");
    std::fs::write(&path, "export default function () {}\n").expect("failed to write script");
    path
}

#[cfg(unix)]
fn write_fake_k6(dir: &TempDir, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt as _;

    let path = dir.path().join("k6");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("failed to write fake k6");
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn missing_script_is_rejected() {
    let cli = LauncherCli {
        script: PathBuf::from("/non/existent/scenario.js"),
    };

    let err = run(cli).unwrap_err();
    let config_err = err
        .downcast_ref::<ConfigError>()
        .expect("expected a ConfigError");
    assert!(matches!(config_err, ConfigError::ScriptNotFound { .. }));
}

#[test]
fn validation_failure_reports_the_violation_and_does_not_launch() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir);

    with_env(
        &[
            ("K6_SCENARIO_TYPE", "constant-arrival-rate"),
            ("K6_RATE", "50"),
            ("K6_TIME_UNIT", "1s"),
            ("K6_DURATION", "10m"),
            ("K6_PRE_ALLOCATED_VUS", "20"),
            ("K6_MAX_VUS", "10"),
            // If the launcher tried to spawn anyway, this would produce a
            // different error than the validation one asserted below.
            (K6_PATH_ENV, "/non/existent/path/to/k6"),
        ],
        || {
            let err = run(LauncherCli {
                script: script.clone(),
            })
            .unwrap_err();

            match err.downcast_ref::<ConfigError>() {
                Some(ConfigError::Invalid { errors, .. }) => {
                    assert_eq!(errors.len(), 1);
                    assert!(errors[0].to_string().contains("K6_MAX_VUS"));
                }
                other => panic!("expected Invalid, got {other:?}"),
            }
        },
    );
}

#[test]
fn missing_scenario_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir);

    with_env(&[], || {
        let err = run(LauncherCli {
            script: script.clone(),
        })
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingScenarioType)
        ));
    });
}

#[cfg(unix)]
#[test]
fn child_exit_code_is_propagated() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir);
    let fake_k6 = write_fake_k6(&dir, "exit 7");

    with_env(
        &[
            ("K6_SCENARIO_TYPE", "shared-iterations"),
            ("K6_VUS", "2"),
            ("K6_ITERATIONS", "10"),
            (K6_PATH_ENV, fake_k6.to_str().unwrap()),
        ],
        || {
            let code = run(LauncherCli {
                script: script.clone(),
            })
            .unwrap();
            assert_eq!(code, 7);
        },
    );
}

#[cfg(unix)]
#[test]
fn ignored_variables_are_scrubbed_from_the_child_environment() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir);
    // Validation warns that rate and stages are ignored for constant-vus;
    // the fake engine asserts they were removed from its environment while
    // the relevant fields survived.
    let fake_k6 = write_fake_k6(
        &dir,
        r#"[ -z "$K6_RATE" ] || exit 55
[ -z "$K6_STAGES_PARAM" ] || exit 56
[ -z "$K6_STAGES" ] || exit 57
[ "$K6_DURATION" = "5m" ] || exit 58
[ "$K6_VUS" = "2" ] || exit 59
exit 0"#,
    );

    with_env(
        &[
            ("K6_SCENARIO_TYPE", "constant-vus"),
            ("K6_VUS", "2"),
            ("K6_DURATION", "5m"),
            ("K6_RATE", "50"),
            ("K6_STAGES_PARAM", r#"[{"duration":"30s","target":10}]"#),
            (K6_PATH_ENV, fake_k6.to_str().unwrap()),
        ],
        || {
            let code = run(LauncherCli {
                script: script.clone(),
            })
            .unwrap();
            assert_eq!(code, 0);
        },
    );
}

#[cfg(unix)]
#[test]
fn successful_run_returns_the_engine_exit_code() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir);
    // The fake engine checks that the derived flags and environment made it
    // through to the subprocess.
    let fake_k6 = write_fake_k6(
        &dir,
        r#"case "$*" in *"--vus 2"*) ;; *) exit 40;; esac
case "$*" in *"--iterations 10"*) ;; *) exit 41;; esac
[ "$K6_SCENARIO_TYPE" = "shared-iterations" ] || exit 42
[ "$TARGET_ENV" = "uat" ] || exit 43
exit 0"#,
    );

    with_env(
        &[
            ("K6_SCENARIO_TYPE", "shared-iterations"),
            ("K6_VUS", "2"),
            ("K6_ITERATIONS", "10"),
            (K6_PATH_ENV, fake_k6.to_str().unwrap()),
        ],
        || {
            let code = run(LauncherCli {
                script: script.clone(),
            })
            .unwrap();
            assert_eq!(code, 0);
        },
    );
}
