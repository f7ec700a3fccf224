#![doc(test(attr(deny(warnings))))]

//! Household financial health analysis.
//!
//! The engines live in `finhealth-core`; this crate adds the text report, the unified
//! error type and the `finhealth_cli` shell.

pub mod cli;
pub mod errors;
pub mod report;
pub mod utils;

pub use errors::{CliError, FinHealthError};
pub use finhealth_config as config;
pub use finhealth_core as engine;
pub use finhealth_domain as domain;
pub use finhealth_storage_json as storage;
pub use report::{render_report, ReportLine, ReportOptions};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("finhealth tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
