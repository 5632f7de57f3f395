use clap::{Parser, ValueEnum};
use std::net::IpAddr;
use std::sync::Arc;
use stockplot_client::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address the web server binds to.
    #[arg(long, env = "STOCKPLOT_ADDRESS", default_value = "127.0.0.1")]
    pub address: IpAddr,

    /// Port the web server listens on.
    #[arg(long, env = "STOCKPLOT_PORT", default_value_t = 8000)]
    pub port: u16,

    /// `User-Agent` header sent to the price provider.
    #[arg(long, env = "USER_AGENT")]
    pub user_agent: String,

    /// Where closing prices come from.
    #[arg(long, value_enum, default_value_t = ProviderArgs::Yahoo)]
    pub provider: ProviderArgs,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProviderArgs {
    /// Yahoo Finance chart API.
    Yahoo,
}

impl ProviderArgs {
    pub fn build(self, client: Client) -> Arc<dyn PriceProvider> {
        match self {
            ProviderArgs::Yahoo => Arc::new(YahooFinance::new(client)),
        }
    }
}
