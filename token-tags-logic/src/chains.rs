use crate::{Error, RoutingMode};
use serde::Deserialize;
use std::collections::BTreeMap;
use url::Url;

pub const ETHEREUM_MAINNET: &str = "1";

const MAINNET_GATEWAY_URL: &str =
    "https://gateway.thegraph.com/api/subgraphs/name/amxx/eip721-subgraph";
const MAINNET_PUBLIC_URL: &str = "https://api.thegraph.com/subgraphs/name/amxx/eip721-subgraph";

/// Subgraph endpoints serving a single chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainEndpoint {
    /// Queried in [`RoutingMode::Direct`] with the bearer api key.
    pub gateway_url: Url,
    /// Queried in [`RoutingMode::Public`]. Chains without it support the direct mode only.
    #[serde(default)]
    pub public_url: Option<Url>,
}

impl ChainEndpoint {
    pub fn url(&self, mode: &RoutingMode) -> Option<&Url> {
        match mode {
            RoutingMode::Direct { .. } => Some(&self.gateway_url),
            RoutingMode::Public => self.public_url.as_ref(),
        }
    }
}

/// Chain id to subgraph endpoints table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ChainEndpoints(BTreeMap<String, ChainEndpoint>);

impl Default for ChainEndpoints {
    fn default() -> Self {
        Self::empty().with_chain(
            ETHEREUM_MAINNET,
            ChainEndpoint {
                gateway_url: Url::parse(MAINNET_GATEWAY_URL).expect("should be valid url"),
                public_url: Some(Url::parse(MAINNET_PUBLIC_URL).expect("should be valid url")),
            },
        )
    }
}

impl ChainEndpoints {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_chain(mut self, chain_id: impl Into<String>, endpoint: ChainEndpoint) -> Self {
        self.0.insert(chain_id.into(), endpoint);
        self
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, chain_id: &str) -> Result<&ChainEndpoint, Error> {
        self.0
            .get(chain_id)
            .ok_or_else(|| Error::UnsupportedChain(chain_id.to_string()))
    }

    /// Returns the url to query for the chain in the given mode.
    /// Never touches the network.
    pub fn resolve(&self, chain_id: &str, mode: &RoutingMode) -> Result<&Url, Error> {
        self.get(chain_id)?.url(mode).ok_or_else(|| {
            Error::UnsupportedChain(format!("{chain_id} (no public endpoint configured)"))
        })
    }
}
