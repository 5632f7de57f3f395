use crate::provider::PriceProvider;
use crate::series::{DateRange, PriceCell, PriceSeries, Symbol};
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://query1.finance.yahoo.com";
const INTERVAL: &str = "1d";
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Daily closing prices from the Yahoo Finance chart endpoint.
pub struct YahooFinance {
    client: Client,
    base_url: String,
}

impl YahooFinance {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        YahooFinance {
            client,
            base_url: base_url.into(),
        }
    }

    /// `period2` is exclusive, so the range is extended to the midnight after `range.end`.
    pub fn price_url(&self, symbol: &Symbol, range: &DateRange) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid provider url: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("provider url cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol.as_str()]);
        url.query_pairs_mut()
            .append_pair("period1", &midnight_utc(range.start).to_string())
            .append_pair(
                "period2",
                &(midnight_utc(range.end) + SECONDS_PER_DAY).to_string(),
            )
            .append_pair("interval", INTERVAL);
        Ok(url)
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

#[async_trait]
impl PriceProvider for YahooFinance {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    async fn closing_prices(&self, symbol: &Symbol, range: &DateRange) -> Result<PriceSeries> {
        let url = self.price_url(symbol, range)?;
        log::debug!("[{symbol}] GET {url}");

        // error payloads arrive with a 4xx status, so the body is parsed regardless
        let price_response: PriceHistory = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("[{symbol}] price request failed"))?
            .json()
            .await
            .with_context(|| format!("[{symbol}] malformed price response"))?;

        price_response.into_series(symbol)
    }
}

// `price` schema
#[derive(Deserialize, Serialize, Debug)]
pub struct PriceHistory {
    pub chart: PriceResponse,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PriceResponse {
    pub result: Option<Vec<PriceCategories>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PriceCategories {
    #[serde(default)]
    pub meta: Meta,
    /// Session open of each row; absent when the range holds no trading days.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Meta {
    /// Exchange offset from UTC, in seconds.
    #[serde(default)]
    pub gmtoffset: i64,
}

/// Transform a `unix timestamp` -> exchange-local `naive date`, e.g.,
///             `1704236400` at `+39600` -> `2024-01-03`
pub fn exchange_date(timestamp: i64, gmtoffset: i64) -> Result<NaiveDate> {
    DateTime::from_timestamp(timestamp + gmtoffset, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| anyhow!("timestamp out of range: {timestamp}"))
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Quote {
    /// `null` on rows the exchange did not trade.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl PriceHistory {
    pub fn into_series(self, symbol: &Symbol) -> Result<PriceSeries> {
        let chart = self.chart;
        if let Some(error) = chart.error {
            bail!("[{symbol}] {}: {}", error.code, error.description);
        }

        let base = chart
            .result
            .and_then(|result| result.into_iter().next())
            .ok_or_else(|| anyhow!("[{symbol}] provider returned no price data"))?;

        let closes = base
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|quote| quote.close)
            .unwrap_or_default();

        if closes.len() != base.timestamp.len() {
            log::warn!(
                "[{symbol}] {} timestamps against {} closes; extra rows ignored",
                base.timestamp.len(),
                closes.len()
            );
        }

        let gmtoffset = base.meta.gmtoffset;
        let mut series = Vec::with_capacity(closes.len());
        for (timestamp, close) in base.timestamp.into_iter().zip(closes) {
            let dated = exchange_date(timestamp, gmtoffset)
                .with_context(|| format!("[{symbol}] bad price row"))?;
            match close {
                Some(close) => series.push(PriceCell { dated, close }),
                None => log::trace!("[{symbol}] no close on {dated}; row dropped"),
            }
        }
        Ok(PriceSeries::new(series))
    }
}
