use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct LauncherCli {
    /// Path to the k6 script to run
    #[clap(short, long)]
    pub script: PathBuf,
}
