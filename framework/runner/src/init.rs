use clap::Parser;

use crate::cli::LauncherCli;

/// Initialise logging and parse the command line for the launcher.
pub fn init() -> LauncherCli {
    env_logger::init();

    LauncherCli::parse()
}
