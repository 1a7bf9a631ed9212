//! ERC-721 contracts exposed by the eip721 subgraph.

use super::GraphQlQuery;
use serde::{Deserialize, Serialize};

/// Cursor value ordered before every contract id.
pub const FIRST_PAGE_CURSOR: &str = "";

pub const ERC721_CONTRACTS_QUERY: &str = r#"query Erc721Contracts($last_id: String!, $first: Int!) {
  erc721Contracts(
    first: $first
    orderBy: id
    orderDirection: asc
    where: { id_gt: $last_id }
  ) {
    id
    symbol
    asAccount {
      id
    }
    supportsMetadata
    name
  }
}"#;

/// A single page of contracts with ids strictly greater than `last_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc721ContractsPage {
    pub last_id: String,
    pub first: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Erc721ContractsVariables {
    pub last_id: String,
    pub first: usize,
}

impl GraphQlQuery for Erc721ContractsPage {
    type Variables = Erc721ContractsVariables;
    type Response = Erc721ContractsResponse;

    fn document(&self) -> &'static str {
        ERC721_CONTRACTS_QUERY
    }

    fn variables(&self) -> Self::Variables {
        Erc721ContractsVariables {
            last_id: self.last_id.clone(),
            first: self.first,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721ContractsResponse {
    pub erc721_contracts: Vec<Erc721Contract>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Contract {
    pub id: String,
    pub symbol: Option<String>,
    pub as_account: Account,
    pub supports_metadata: bool,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
}
