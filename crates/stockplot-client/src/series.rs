use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticker of a tradable security, e.g. `AAPL`.
///
/// Taken verbatim from the caller; the provider decides whether it exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(ticker: impl Into<String>) -> Self {
        Symbol(ticker.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(ticker: &str) -> Self {
        Symbol::new(ticker)
    }
}

/// Inclusive range of calendar days.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceCell {
    pub dated: NaiveDate,
    pub close: f64,
}

/// Closing prices ordered by date, ascending.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct PriceSeries(Vec<PriceCell>);

impl PriceSeries {
    pub fn new(cells: Vec<PriceCell>) -> Self {
        PriceSeries(cells)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[PriceCell] {
        &self.0
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().map(|cell| cell.dated)
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|cell| cell.close)
    }

    /// Drop the first `n` cells. Dropping at least `len()` leaves an empty series.
    pub fn skip(mut self, n: usize) -> Self {
        if n >= self.0.len() {
            self.0.clear();
        } else {
            self.0.drain(..n);
        }
        self
    }
}

impl FromIterator<PriceCell> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceCell>>(iter: I) -> Self {
        PriceSeries(iter.into_iter().collect())
    }
}
