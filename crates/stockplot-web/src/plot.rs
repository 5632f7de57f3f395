use crate::chart::{AxisType, LineChart};
use crate::clock::Clock;
use anyhow::Result;
use chrono::NaiveDate;
use stockplot_client::prelude::*;

/// Leading points dropped before plotting.
pub const WARMUP_PERIODS: usize = 50;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;
pub const COLOR: &str = "#1B9E77";

/// First day of every requested range.
pub fn history_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 1, 1).expect("2012-01-01 is a valid date")
}

/// From [`history_start`] up to and including today.
pub fn date_range(clock: &dyn Clock) -> DateRange {
    DateRange::new(history_start(), clock.today())
}

/// Fetch the closing prices of `symbol` and chart everything past the warm-up.
///
/// A series of [`WARMUP_PERIODS`] points or fewer charts nothing.
pub async fn make_plot(
    symbol: &Symbol,
    provider: &dyn PriceProvider,
    clock: &dyn Clock,
) -> Result<LineChart> {
    let range = date_range(clock);
    log::info!(
        "[{symbol}] fetching closing prices from {} over {range}",
        provider.name()
    );

    let series = provider.closing_prices(symbol, &range).await?;
    let fetched = series.len();
    let series = series.skip(WARMUP_PERIODS);
    log::debug!("[{symbol}] plotting {} of {fetched} points", series.len());

    let chart = LineChart::new("close")
        .width(WIDTH)
        .height(HEIGHT)
        .color(COLOR)
        .x_axis(AxisType::Datetime)
        .title(format!("{symbol} price at close"))
        .series(series);
    Ok(chart)
}
