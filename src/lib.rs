#![doc(test(attr(deny(warnings))))]

//! WalletLog Core offers the ledger store, aggregation, and period filtering
//! primitives that power higher level budgeting screens.

pub mod currency;
pub mod errors;
pub mod ledger;
pub mod services;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("WalletLog Core tracing initialized.");
    });
}
