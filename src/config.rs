// src/config.rs

//! A centralized place for the market's tuning constants.

use chrono::TimeDelta;

// --- VWSP ---
/// Trades older than this many minutes are ignored by the VWSP.
pub const DEFAULT_VWSP_WINDOW_MINUTES: i64 = 5;

// --- Logging ---
/// Used by the demo binary when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

// --- Demo ---
pub const DEMO_ALE_PRICE: f64 = 314.0;
pub const DEMO_GIN_PRICE: f64 = 839.0;
pub const DEMO_TEA_TRADE_PRICE: f64 = 435.0;
pub const DEMO_TEA_TRADE_QUANTITY: u64 = 200;

/// The VWSP window as a `TimeDelta`.
#[inline]
pub fn default_vwsp_window() -> TimeDelta {
    TimeDelta::minutes(DEFAULT_VWSP_WINDOW_MINUTES)
}
