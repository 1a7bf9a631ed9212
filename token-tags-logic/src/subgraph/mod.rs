mod client;
pub mod erc721;
mod query;

pub use client::{SubgraphClient, SubgraphClientConfig};
pub use query::GraphQlQuery;
