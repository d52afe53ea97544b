#![forbid(unsafe_code)]

//! Core decision and removal engine for the biosculpter detox cycle.
//!
//! This crate provides:
//! - Affliction catalog (explicit tables and naming markers)
//! - Classifier for addictions, withdrawals and tolerances
//! - Detox engine and treatable-condition report
//! - Host surfaces (subject, notifier) and the treatment cycle

pub mod types;
pub mod error;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod logging;
pub mod notify;
pub mod subject;
pub mod report;
pub mod engine;
pub mod cycle;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use classifier::{classify, classify_tolerance};
pub use config::Config;
pub use notify::{Notice, Notifier, TracingNotifier};
pub use subject::{Patient, Subject};
pub use report::list_treatable_condition_names;
pub use engine::{DetoxEngine, RemovalPlan};
pub use cycle::{CycleCompletion, CycleOffer, DetoxCycle, TreatmentLetter};
