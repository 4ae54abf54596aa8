#![doc(test(attr(deny(warnings))))]

//! Finance Core offers a validated transaction ledger with pluggable
//! persistence, aggregation reports, and display formatting for CLIs.

pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod domain;
pub mod errors;
pub mod reports;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
