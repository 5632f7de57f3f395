use crate::chart::EmbedOptions;
use crate::clock::{Clock, SystemClock};
use std::sync::Arc;
use stockplot_client::provider::PriceProvider;

/// Everything a request needs, shared read-only across requests.
pub struct AppState {
    pub provider: Arc<dyn PriceProvider>,
    pub clock: Arc<dyn Clock>,
    pub embed: EmbedOptions,
}

impl AppState {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        AppState {
            provider,
            clock: Arc::new(SystemClock),
            embed: EmbedOptions::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_embed(mut self, embed: EmbedOptions) -> Self {
        self.embed = embed;
        self
    }
}
