use super::query::{self, GraphQlQuery};
use crate::Error;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware};
use std::{fmt, sync::Arc, time::Duration};
use url::Url;

#[derive(Clone, Default)]
pub struct SubgraphClientConfig {
    /// The maximum time limit for a single request. Requests are never cancelled if unset.
    pub http_timeout: Option<Duration>,
    pub middlewares: Vec<Arc<dyn Middleware>>,
}

// We have to derive `Debug` manually as we need to skip middlewares field which does not implement it.
impl fmt::Debug for SubgraphClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubgraphClientConfig")
            .field("http_timeout", &self.http_timeout)
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}

impl SubgraphClientConfig {
    pub fn http_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_middleware<M: Middleware>(self, middleware: M) -> Self {
        self.with_arc_middleware(Arc::new(middleware))
    }

    pub fn with_arc_middleware<M: Middleware>(mut self, middleware: Arc<M>) -> Self {
        self.middlewares.push(middleware);
        self
    }
}

/// Sends GraphQL queries to subgraph endpoints.
/// The url is passed per request, so one client serves every chain.
#[derive(Clone)]
pub struct SubgraphClient {
    http_client: ClientWithMiddleware,
}

impl SubgraphClient {
    pub fn new(config: SubgraphClientConfig) -> Result<Self, Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = config
            .middlewares
            .into_iter()
            .fold(ClientBuilder::new(builder.build()?), |builder, middleware| {
                builder.with_arc(middleware)
            })
            .build();

        Ok(Self { http_client })
    }

    pub async fn request<Q: GraphQlQuery>(
        &self,
        url: &Url,
        api_key: Option<&str>,
        query: &Q,
    ) -> Result<Q::Response, Error> {
        let body = query::Request {
            query: query.document(),
            variables: query.variables(),
        };

        let mut request = self.http_client.post(url.clone()).json(&body);
        if let Some(api_key) = api_key {
            request = request.bearer_auth(api_key);
        }
        let response = request.send().await?;

        let status_code = response.status();
        if !status_code.is_success() {
            return Err(Error::InvalidStatusCode {
                status_code,
                message: status_code
                    .canonical_reason()
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        let text = response.text().await?;
        let jd = &mut serde_json::Deserializer::from_str(&text);
        let response: query::Response<Q::Response> = serde_path_to_error::deserialize(jd)?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            return Err(Error::GraphQl(
                errors.into_iter().map(|error| error.message).collect(),
            ));
        }
        response
            .data
            .ok_or_else(|| Error::GraphQl(vec!["response contains no data".to_string()]))
    }
}
