// src/types/mod.rs

pub mod trade;

pub use trade::{Indicator, Trade};
