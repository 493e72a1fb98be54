use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};

use crate::types::LauncherResult;

/// Environment variable to override the path to the k6 binary.
pub const K6_PATH_ENV: &str = "LAUNCHER_K6_PATH";

/// Get the path to the k6 binary.
///
/// If the [`K6_PATH_ENV`] environment variable is set, its value is used as
/// the path to the k6 binary. If it is not set, the default value "k6" is
/// used, which assumes that the binary is available in the system's PATH.
pub fn k6_path() -> LauncherResult<PathBuf> {
    match env::var(K6_PATH_ENV).ok().as_deref() {
        Some("") => {
            bail!("'{K6_PATH_ENV}' set to empty string");
        }
        Some("k6") | None => {
            log::debug!("'{K6_PATH_ENV}' does not point to a binary so looking for 'k6' in the user's 'PATH'");
            which::which("k6").with_context(|| {
                format!(
                    "k6 binary not found in PATH. Please install k6 or set '{K6_PATH_ENV}' to the correct path."
                )
            })
        }
        Some(path) => {
            let k6_path = PathBuf::from(path);
            if !k6_path.exists() {
                bail!(
                    "Path to k6 binary overwritten with '{K6_PATH_ENV}={path}' but that path doesn't exist",
                    path = k6_path.display()
                );
            }
            Ok(k6_path)
        }
    }
}
