pub mod provider;
pub mod series;
pub mod yahoo_finance;

pub mod prelude {
    pub use crate::provider::PriceProvider;
    pub use crate::series::{DateRange, PriceCell, PriceSeries, Symbol};
    pub use crate::yahoo_finance::YahooFinance;
    #[allow(unused_imports)]
    pub use reqwest::Client;

    pub fn build_client(user_agent: &str) -> anyhow::Result<Client> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .build()?;
        Ok(client)
    }
}
