// src/market.rs

use crate::config::default_vwsp_window;
use crate::error::MarketError;
use crate::stocks::{Stock, Symbol, sample_universe};
use crate::types::{Indicator, Trade};
use chrono::{DateTime, TimeDelta, Utc};
use statrs::statistics::Statistics;
use std::collections::HashMap;
use tracing::{debug, trace};

/// The exchange. It owns every listed stock and the trade tape of every symbol.
///
/// The two registries are independent: a symbol may have trades without being
/// listed, and a listed stock may never trade.
#[derive(Debug, Default)]
pub struct StockMarket {
    /// Listing order, used when iterating for the all-share index.
    symbols: Vec<Symbol>,
    stocks: HashMap<Symbol, Stock>,
    /// Per-symbol trades in recording order.
    trade_history: HashMap<Symbol, Vec<Trade>>,
}

impl StockMarket {
    pub fn new() -> Self {
        Self::default()
    }

    /// A market with the five sample stocks listed and no trades.
    pub fn with_sample_universe() -> Self {
        let mut market = Self::new();
        for (symbol, stock) in sample_universe() {
            market.add_stock(symbol, stock);
        }
        market
    }

    /// Lists `stock` under `symbol`. Re-listing a symbol replaces its stock but keeps its position.
    pub fn add_stock<S: Into<Symbol>>(&mut self, symbol: S, stock: Stock) {
        let symbol = symbol.into();
        debug!(%symbol, stock_type = ?stock.stock_type, par_value = stock.par_value, "stock listed");
        if self.stocks.insert(symbol.clone(), stock).is_none() {
            self.symbols.push(symbol);
        }
    }

    pub fn stock(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.get(symbol)
    }

    /// Mutable access so a listed stock can distribute dividends.
    pub fn stock_mut(&mut self, symbol: &str) -> Option<&mut Stock> {
        self.stocks.get_mut(symbol)
    }

    /// Listed symbols in listing order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Appends a trade to `symbol`'s tape. The symbol does not have to be listed.
    pub fn record_trade<S: Into<Symbol>>(
        &mut self,
        symbol: S,
        timestamp: DateTime<Utc>,
        quantity: u64,
        indicator: Indicator,
        price: f64,
    ) {
        let symbol = symbol.into();
        debug!(%symbol, %timestamp, quantity, ?indicator, price, "trade recorded");
        self.trade_history
            .entry(symbol)
            .or_default()
            .push(Trade::new(timestamp, quantity, indicator, price));
    }

    pub fn trades(&self, symbol: &str) -> Option<&[Trade]> {
        self.trade_history.get(symbol).map(Vec::as_slice)
    }

    /// VWSP over the trades of the last five minutes.
    pub fn volume_weighted_stock_price(&self, symbol: &str) -> Result<f64, MarketError> {
        self.volume_weighted_stock_price_over(symbol, default_vwsp_window())
    }

    pub fn volume_weighted_stock_price_over(
        &self,
        symbol: &str,
        timespan: TimeDelta,
    ) -> Result<f64, MarketError> {
        self.volume_weighted_stock_price_at(symbol, timespan, Utc::now())
    }

    /// `sum(price * quantity) / sum(quantity)` over trades with `now - timestamp <= timespan`.
    ///
    /// Trades stamped after `now` are kept. Returns 0 when no volume falls in the window,
    /// and `NoTradeHistory` when the symbol never traded at all.
    pub fn volume_weighted_stock_price_at(
        &self,
        symbol: &str,
        timespan: TimeDelta,
        now: DateTime<Utc>,
    ) -> Result<f64, MarketError> {
        let trades = self
            .trade_history
            .get(symbol)
            .ok_or_else(|| MarketError::NoTradeHistory {
                symbol: symbol.to_string(),
            })?;

        let (quantity_sum, price_quantity_sum) = trades
            .iter()
            .filter(|t| now - t.timestamp <= timespan)
            .fold((0u128, 0.0f64), |(q, pq), t| {
                (q + u128::from(t.quantity), pq + t.notional())
            });

        trace!(symbol, quantity_sum, trades = trades.len(), "vwsp window");
        if quantity_sum == 0 {
            return Ok(0.0);
        }
        Ok(price_quantity_sum / quantity_sum as f64)
    }

    /// Geometric mean of the VWSP of every listed stock.
    pub fn all_share_index(&self) -> Result<f64, MarketError> {
        self.all_share_index_at(Utc::now())
    }

    /// The index with every VWSP taken over the default window ending at `now`.
    ///
    /// Fails on an empty listing, on a listed stock that never traded, and on the
    /// first stock (in listing order) whose VWSP is not positive.
    pub fn all_share_index_at(&self, now: DateTime<Utc>) -> Result<f64, MarketError> {
        if self.symbols.is_empty() {
            return Err(MarketError::DivisionByZero {
                metric: "all-share index",
            });
        }

        let window = default_vwsp_window();
        let mut prices = Vec::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            let vwsp = self.volume_weighted_stock_price_at(symbol, window, now)?;
            if vwsp.is_nan() || vwsp <= 0.0 {
                return Err(MarketError::NonPositiveVwsp {
                    symbol: symbol.clone(),
                    value: vwsp,
                });
            }
            prices.push(vwsp);
        }

        Ok(prices.geometric_mean())
    }
}
