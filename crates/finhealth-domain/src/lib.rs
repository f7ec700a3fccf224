//! finhealth-domain
//!
//! Pure data models for household financial snapshots and their derived analyses.
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod client;
pub mod metrics;
pub mod profile;
pub mod risk;

pub use client::*;
pub use metrics::*;
pub use profile::*;
pub use risk::*;
