// src/types/trade.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a recorded trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Indicator {
    Buy,
    Sell,
}

/// One executed trade. Built once by `StockMarket::record_trade` and never touched again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub timestamp: DateTime<Utc>,
    /// Shares traded.
    pub quantity: u64,
    pub indicator: Indicator,
    /// Price per share.
    pub price: f64,
}

impl Trade {
    pub fn new(timestamp: DateTime<Utc>, quantity: u64, indicator: Indicator, price: f64) -> Self {
        Self {
            timestamp,
            quantity,
            indicator,
            price,
        }
    }

    /// price * quantity, the numerator contribution to a VWSP.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
