use crate::{
    subgraph::{
        erc721::{Erc721ContractsPage, FIRST_PAGE_CURSOR},
        SubgraphClient, SubgraphClientConfig,
    },
    ChainEndpoints, Error, RoutingMode, Tag, TagTemplate,
};
use serde::Deserialize;
use std::time::Duration;

#[serde_with::serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetcherSettings {
    /// Number of contracts requested per page. A shorter page ends pagination.
    pub page_size: usize,
    /// Pagination stops once at least that many tags have been accumulated.
    /// The last page is kept whole, so the result may exceed the limit.
    pub max_records: usize,
    #[serde_as(as = "Option<serde_with::DurationSeconds<u64>>")]
    pub http_timeout: Option<Duration>,
}

impl Default for FetcherSettings {
    fn default() -> Self {
        Self {
            page_size: 1000,
            max_records: 5000,
            http_timeout: None,
        }
    }
}

/// Pages through the ERC-721 contracts of a chain and turns them into tags.
#[derive(Clone)]
pub struct TagsFetcher {
    client: SubgraphClient,
    chains: ChainEndpoints,
    template: TagTemplate,
    page_size: usize,
    max_records: usize,
}

impl TagsFetcher {
    pub fn new(
        chains: ChainEndpoints,
        template: TagTemplate,
        settings: FetcherSettings,
    ) -> Result<Self, Error> {
        let config = SubgraphClientConfig::default().http_timeout(settings.http_timeout);
        Self::with_client_config(chains, template, settings, config)
    }

    pub fn with_client_config(
        chains: ChainEndpoints,
        template: TagTemplate,
        settings: FetcherSettings,
        config: SubgraphClientConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            client: SubgraphClient::new(config)?,
            chains,
            template,
            page_size: settings.page_size,
            max_records: settings.max_records,
        })
    }

    /// Fetches tags for every contract of the chain, up to the configured limit.
    /// Nothing is returned on failure, even if some pages were fetched.
    #[tracing::instrument(skip(self), level = "info")]
    pub async fn fetch(&self, chain_id: &str, mode: &RoutingMode) -> Result<Vec<Tag>, Error> {
        mode.validate()?;
        let url = self.chains.resolve(chain_id, mode)?;
        let api_key = mode.api_key();

        let mut tags = Vec::new();
        let mut last_id = FIRST_PAGE_CURSOR.to_string();
        let mut has_more = true;
        while has_more && tags.len() < self.max_records {
            let page = Erc721ContractsPage {
                last_id,
                first: self.page_size,
            };
            tracing::debug!(url = %url, last_id = %page.last_id, "requesting contracts page");
            let contracts = self
                .client
                .request(url, api_key, &page)
                .await?
                .erc721_contracts;

            tags.extend(
                contracts
                    .iter()
                    .map(|contract| Tag::from_contract(chain_id, contract, &self.template)),
            );
            tracing::info!(
                last_id = %page.last_id,
                page_len = contracts.len(),
                total = tags.len(),
                "contracts page processed"
            );

            has_more = contracts.len() >= self.page_size;
            last_id = match contracts.last() {
                Some(contract) => contract.id.clone(),
                None => break,
            };
        }

        if has_more {
            tracing::info!(
                max_records = self.max_records,
                total = tags.len(),
                "records limit reached, more contracts may be available"
            );
        }
        tracing::info!(total = tags.len(), "tags fetching finished");
        Ok(tags)
    }
}

/// Fetches tags through the gateway endpoint authorized with `api_key`.
pub async fn fetch_tags(
    fetcher: &TagsFetcher,
    chain_id: &str,
    api_key: &str,
) -> Result<Vec<Tag>, Error> {
    let mode = RoutingMode::direct(api_key)?;
    fetcher.fetch(chain_id, &mode).await
}

/// Fetches tags through the public endpoint. Providing any `api_key` is an error.
pub async fn fetch_public_tags(
    fetcher: &TagsFetcher,
    chain_id: &str,
    api_key: Option<&str>,
) -> Result<Vec<Tag>, Error> {
    let mode = RoutingMode::public_only(api_key)?;
    fetcher.fetch(chain_id, &mode).await
}
