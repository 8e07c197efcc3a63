// src/stocks/definitions.rs
//! Per-symbol stock data and the dividend based ratios.
//
//! The sample universe below is the five-stock fixture the demo binary and
//! the tests share. Extend `sample_universe()` if you need more tickers.

pub type Symbol = String;

use crate::error::MarketError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockType {
    Common,
    /// Pays `fixed_dividend * par_value` whatever amount is distributed.
    Preferred,
}

/// Static facts about a listed stock plus the dividends it has paid so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub stock_type: StockType,
    pub par_value: f64,
    /// Fraction of par paid per distribution. Only read for `Preferred` stocks.
    pub fixed_dividend: f64,
    /// Append-only, most recent last.
    dividend_history: Vec<f64>,
}

impl Stock {
    #[inline]
    pub fn new(stock_type: StockType, par_value: f64, fixed_dividend: f64) -> Self {
        Self {
            stock_type,
            par_value,
            fixed_dividend,
            dividend_history: Vec::new(),
        }
    }

    #[inline]
    pub fn common(par_value: f64) -> Self {
        Self::new(StockType::Common, par_value, 0.0)
    }

    #[inline]
    pub fn preferred(par_value: f64, fixed_dividend: f64) -> Self {
        Self::new(StockType::Preferred, par_value, fixed_dividend)
    }

    /// Appends one dividend to the history.
    ///
    /// Common stocks record `amount` as given (zero and negative included). Preferred
    /// stocks ignore `amount` and record `fixed_dividend * par_value`.
    pub fn distribute_dividend(&mut self, amount: f64) {
        let recorded = match self.stock_type {
            StockType::Common => amount,
            StockType::Preferred => {
                let fixed = self.fixed_dividend * self.par_value;
                if amount != 0.0 && amount != fixed {
                    warn!(amount, fixed, "preferred stock pays its fixed dividend, amount ignored");
                }
                fixed
            }
        };
        debug!(stock_type = ?self.stock_type, dividend = recorded, "dividend distributed");
        self.dividend_history.push(recorded);
    }

    /// `distribute_dividend(0.0)`: the fixed dividend for preferred stocks, a zero one for common.
    #[inline]
    pub fn distribute_default_dividend(&mut self) {
        self.distribute_dividend(0.0);
    }

    /// The most recent dividend, 0 if none has been paid yet.
    #[inline]
    pub fn last_dividend(&self) -> f64 {
        self.dividend_history.last().copied().unwrap_or(0.0)
    }

    pub fn dividend_history(&self) -> &[f64] {
        &self.dividend_history
    }

    /// `last_dividend / price`.
    pub fn dividend_yield(&self, price: f64) -> Result<f64, MarketError> {
        if price == 0.0 {
            return Err(MarketError::DivisionByZero {
                metric: "dividend yield",
            });
        }
        Ok(self.last_dividend() / price)
    }

    /// `price / last_dividend`, or `None` when no dividend was ever paid or the last one is zero.
    pub fn price_earnings_ratio(&self, price: f64) -> Option<f64> {
        match self.dividend_history.last() {
            Some(&dividend) if dividend != 0.0 => Some(price / dividend),
            Some(_) => {
                debug!(price, "P/E ratio undefined: last dividend is zero");
                None
            }
            None => {
                debug!(price, "P/E ratio undefined: no dividend distributed");
                None
            }
        }
    }
}

/// The five stocks of the sample exchange, in listing order. No dividends paid yet.
pub fn sample_universe() -> Vec<(Symbol, Stock)> {
    vec![
        ("TEA".to_string(), Stock::common(100.0)),
        ("POP".to_string(), Stock::common(100.0)),
        ("ALE".to_string(), Stock::common(60.0)),
        ("GIN".to_string(), Stock::preferred(100.0, 2.0)),
        // listed as preferred without a fixed rate, so every distribution records 0
        ("JOE".to_string(), Stock::preferred(250.0, 0.0)),
    ]
}
