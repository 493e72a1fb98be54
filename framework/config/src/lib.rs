//! Resolves k6 scenario configuration from environment variables.
//!
//! The resolver reads the flat `K6_*` environment configuration, classifies the
//! requested executor into a [`ScenarioKind`], validates the field combination
//! required by that kind and derives a normalized environment map plus an
//! equivalent argument list for invoking the k6 binary.

pub mod raw;

mod error;
#[cfg(test)]
mod test_support;
mod plan;
mod resolved;
mod scenario;
mod stages;
mod toggle;
mod validate;

pub use error::ConfigError;
pub use plan::{Executor, ScenarioPlan};
pub use raw::RawConfig;
pub use resolved::{ResolvedConfig, DEFAULT_TARGET_ENV};
pub use scenario::ScenarioKind;
pub use stages::{parse_stages, Stage};
pub use toggle::Toggle;
pub use validate::{validate, ValidationError, ValidationReport};
