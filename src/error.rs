// src/error.rs

use crate::stocks::Symbol;
use thiserror::Error;

/// Failures of the market calculations.
///
/// An undefined P/E ratio is not listed here: `Stock::price_earnings_ratio` reports it as `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarketError {
    #[error("cannot compute {metric}: denominator is zero")]
    DivisionByZero { metric: &'static str },

    #[error("VWSP of {symbol} is {value}, logarithm is undefined")]
    NonPositiveVwsp { symbol: Symbol, value: f64 },

    #[error("no trades recorded for {symbol}")]
    NoTradeHistory { symbol: Symbol },

    #[error("stock {symbol} is not registered")]
    UnknownStock { symbol: Symbol },
}
