use serde_json::{json, Value};
use token_tags_logic::{
    ChainEndpoint, ChainEndpoints, FetcherSettings, TagTemplate, TagsFetcher,
};
use url::Url;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};

pub const GATEWAY_PATH: &str = "/gateway/eip721";
pub const PUBLIC_PATH: &str = "/public/eip721";

/// Subgraph serving a fixed, id-ordered set of contracts.
/// Pages are cut by the `last_id` and `first` variables of the request.
#[derive(Clone)]
pub struct StaticDataset {
    contracts: Vec<Value>,
}

impl StaticDataset {
    pub fn new(contracts: Vec<Value>) -> Self {
        let mut contracts = contracts;
        contracts.sort_by(|a, b| a["id"].as_str().cmp(&b["id"].as_str()));
        Self { contracts }
    }

    pub fn generated(size: usize) -> Self {
        Self::new((0..size).map(|i| contract(&address(i), "TKN", i % 2 == 0)).collect())
    }
}

impl Respond for StaticDataset {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).expect("request body is json");
        let last_id = body["variables"]["last_id"]
            .as_str()
            .expect("last_id is a string");
        let first = body["variables"]["first"].as_u64().expect("first is a number") as usize;

        let page = self
            .contracts
            .iter()
            .filter(|contract| contract["id"].as_str().unwrap() > last_id)
            .take(first)
            .cloned()
            .collect::<Vec<_>>();

        ResponseTemplate::new(200).set_body_json(json!({ "data": { "erc721Contracts": page } }))
    }
}

pub fn address(i: usize) -> String {
    format!("0x{i:040x}")
}

pub fn contract(id: &str, symbol: &str, supports_metadata: bool) -> Value {
    json!({
        "id": id,
        "symbol": symbol,
        "asAccount": { "id": id },
        "supportsMetadata": supports_metadata,
        "name": format!("{symbol} collection"),
    })
}

pub async fn mock_subgraph(dataset: StaticDataset) -> MockServer {
    mock_subgraph_with(dataset).await
}

pub async fn mock_subgraph_with<R: Respond + 'static>(responder: R) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(responder)
        .mount(&server)
        .await;
    server
}

pub fn chains(server: &MockServer) -> ChainEndpoints {
    let base = Url::parse(&server.uri()).unwrap();
    ChainEndpoints::empty().with_chain(
        "1",
        ChainEndpoint {
            gateway_url: base.join(GATEWAY_PATH).unwrap(),
            public_url: Some(base.join(PUBLIC_PATH).unwrap()),
        },
    )
}

pub fn fetcher(server: &MockServer, page_size: usize, max_records: usize) -> TagsFetcher {
    TagsFetcher::new(
        chains(server),
        TagTemplate::default(),
        FetcherSettings {
            page_size,
            max_records,
            http_timeout: None,
        },
    )
    .expect("fetcher initialization")
}

pub fn api_key() -> String {
    "k".repeat(25)
}

pub async fn requests(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("requests recording is enabled")
}

pub fn requested_cursors(requests: &[Request]) -> Vec<String> {
    requests
        .iter()
        .map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            body["variables"]["last_id"].as_str().unwrap().to_string()
        })
        .collect()
}

pub fn assert_path(request: &Request, expected: &str) {
    pretty_assertions::assert_eq!(request.url.path(), expected);
}

pub async fn mock_path(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}
