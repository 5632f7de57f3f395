//! Shared fixtures for the web integration tests.
//!
//! `StubProvider` serves synthetic closing prices for the symbols it is given
//! and records every request it receives, so tests can assert on the date
//! range without touching the network.

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use rocket::local::blocking::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use stockplot_client::prelude::*;
use stockplot_web::clock::FixedClock;
use stockplot_web::state::AppState;

/// First date of every synthetic series.
pub fn first_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
}

/// `len` consecutive days from [`first_date`], closes counting up from `seed`.
pub fn series_of(len: usize, seed: f64) -> PriceSeries {
    (0..len)
        .map(|i| PriceCell {
            dated: first_date() + chrono::Days::new(i as u64),
            close: seed + i as f64,
        })
        .collect()
}

#[derive(Default)]
pub struct StubProvider {
    series: HashMap<String, PriceSeries>,
    requests: Mutex<Vec<(Symbol, DateRange)>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `len` points for `symbol`; closes are seeded from the symbol's
    /// bytes so different symbols never share prices.
    pub fn with(mut self, symbol: &str, len: usize) -> Self {
        let seed = symbol.bytes().map(f64::from).sum();
        self.series.insert(symbol.to_string(), series_of(len, seed));
        self
    }

    pub fn requests(&self) -> Vec<(Symbol, DateRange)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn closing_prices(&self, symbol: &Symbol, range: &DateRange) -> Result<PriceSeries> {
        self.requests.lock().unwrap().push((symbol.clone(), *range));
        match self.series.get(symbol.as_str()) {
            Some(series) => Ok(series.clone()),
            None => bail!("[{symbol}] Not Found: No data found, symbol may be delisted"),
        }
    }
}

pub fn state(provider: Arc<StubProvider>) -> AppState {
    AppState::new(provider).with_clock(Arc::new(FixedClock(today())))
}

pub fn client(provider: Arc<StubProvider>) -> Client {
    Client::tracked(stockplot_web::build(state(provider))).expect("valid rocket instance")
}

/// The chart configuration embedded in a rendered page.
pub fn chart_config(body: &str) -> serde_json::Value {
    let open = "<script type=\"application/json\"";
    let tag = body.find(open).expect("page embeds a chart config");
    let start = tag + body[tag..].find('>').unwrap() + 1;
    let end = start + body[start..].find("</script>").unwrap();
    serde_json::from_str(&body[start..end]).unwrap()
}

pub fn labels(config: &serde_json::Value) -> Vec<String> {
    config["data"]["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|label| label.as_str().unwrap().to_string())
        .collect()
}
