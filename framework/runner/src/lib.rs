mod cli;
mod init;
mod k6_binary;
mod run;
mod summary;
mod types;

pub mod prelude {
    pub use crate::cli::LauncherCli;
    pub use crate::init::init;
    pub use crate::k6_binary::{k6_path, K6_PATH_ENV};
    pub use crate::run::run;
    pub use crate::types::LauncherResult;
}
