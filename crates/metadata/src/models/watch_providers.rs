use serde::{Deserialize, Serialize};

/// Where a movie can be watched in one region.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WatchProviders {
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Vec<WatchProvider>,
    #[serde(default)]
    pub rent: Vec<WatchProvider>,
    #[serde(default)]
    pub buy: Vec<WatchProvider>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WatchProvider {
    pub provider_id: u64,
    pub provider_name: String,
}

impl WatchProviders {
    pub fn is_empty(&self) -> bool {
        self.flatrate.is_empty() && self.rent.is_empty() && self.buy.is_empty()
    }
}
