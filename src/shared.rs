// src/shared.rs

//! A cloneable handle for using one `StockMarket` from several threads.
//!
//! Every call takes the single market lock exactly once, so a dividend or trade
//! append can never interleave with the "last element" reads behind the ratios.

use crate::error::MarketError;
use crate::market::StockMarket;
use crate::stocks::{Stock, Symbol};
use crate::types::Indicator;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedStockMarket {
    inner: Arc<RwLock<StockMarket>>,
}

impl SharedStockMarket {
    pub fn new(market: StockMarket) -> Self {
        Self {
            inner: Arc::new(RwLock::new(market)),
        }
    }

    pub fn add_stock<S: Into<Symbol>>(&self, symbol: S, stock: Stock) {
        self.inner.write().add_stock(symbol, stock);
    }

    pub fn record_trade<S: Into<Symbol>>(
        &self,
        symbol: S,
        timestamp: DateTime<Utc>,
        quantity: u64,
        indicator: Indicator,
        price: f64,
    ) {
        self.inner
            .write()
            .record_trade(symbol, timestamp, quantity, indicator, price);
    }

    /// Distributes a dividend on a listed stock.
    pub fn distribute_dividend(&self, symbol: &str, amount: f64) -> Result<(), MarketError> {
        let mut market = self.inner.write();
        let stock = market
            .stock_mut(symbol)
            .ok_or_else(|| MarketError::UnknownStock {
                symbol: symbol.to_string(),
            })?;
        stock.distribute_dividend(amount);
        Ok(())
    }

    pub fn dividend_yield(&self, symbol: &str, price: f64) -> Result<f64, MarketError> {
        let market = self.inner.read();
        lookup(&market, symbol)?.dividend_yield(price)
    }

    /// `Ok(None)` when the ratio is undefined for a listed stock.
    pub fn price_earnings_ratio(&self, symbol: &str, price: f64) -> Result<Option<f64>, MarketError> {
        let market = self.inner.read();
        Ok(lookup(&market, symbol)?.price_earnings_ratio(price))
    }

    pub fn volume_weighted_stock_price(&self, symbol: &str) -> Result<f64, MarketError> {
        self.inner.read().volume_weighted_stock_price(symbol)
    }

    pub fn all_share_index(&self) -> Result<f64, MarketError> {
        self.inner.read().all_share_index()
    }

    /// Runs `f` against a consistent view of the market.
    pub fn read<R>(&self, f: impl FnOnce(&StockMarket) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<StockMarket> for SharedStockMarket {
    fn from(market: StockMarket) -> Self {
        Self::new(market)
    }
}

fn lookup<'a>(market: &'a StockMarket, symbol: &str) -> Result<&'a Stock, MarketError> {
    market.stock(symbol).ok_or_else(|| MarketError::UnknownStock {
        symbol: symbol.to_string(),
    })
}
