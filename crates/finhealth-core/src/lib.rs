//! finhealth-core
//!
//! Financial metrics and risk assessment engines for finhealth.
//! Depends on finhealth-domain. No CLI, no terminal I/O, no storage interactions.

pub mod analysis;
pub mod error;
pub mod format;
pub mod ladder;
pub mod metrics_service;
pub mod risk_service;
pub mod validation;


pub use analysis::*;
pub use error::CoreError;
pub use format::*;
pub use metrics_service::*;
pub use risk_service::*;
pub use validation::*;
