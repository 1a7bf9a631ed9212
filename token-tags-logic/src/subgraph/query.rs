use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;

/// Represents a GraphQL query that can be sent to a subgraph.
/// New queries should implement this trait.
///
/// If the request succeeds, the call resolves to the `data` object of the response
/// deserialized into `Response`.
pub trait GraphQlQuery {
    type Variables: Serialize;
    type Response: DeserializeOwned + Debug;

    /// The query document. Expected to be a constant.
    fn document(&self) -> &'static str;

    fn variables(&self) -> Self::Variables;
}

#[derive(Debug, Serialize)]
pub(super) struct Request<V> {
    pub query: &'static str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub(super) struct Response<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<ResponseError>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponseError {
    pub message: String,
}
