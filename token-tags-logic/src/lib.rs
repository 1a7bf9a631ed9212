mod chains;
mod error;
mod fetcher;
mod routing;
pub mod subgraph;
mod tags;

pub use chains::{ChainEndpoint, ChainEndpoints, ETHEREUM_MAINNET};
pub use error::{Error, ErrorKind};
pub use fetcher::{fetch_public_tags, fetch_tags, FetcherSettings, TagsFetcher};
pub use routing::RoutingMode;
pub use tags::{Tag, TagTemplate};
