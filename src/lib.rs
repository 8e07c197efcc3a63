// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod config;
pub mod error;
pub mod market;
pub mod shared;
pub mod stocks;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From our `market` registry ---
pub use market::StockMarket;
pub use shared::SharedStockMarket;

// --- From `stocks` ---
pub use stocks::{Stock, StockType, Symbol, sample_universe};

// --- From `types` ---
pub use types::{Indicator, Trade};

// --- Errors ---
pub use error::MarketError;
