use common::config::ClientConfig;
use reqwest::Client;
use reqwest::StatusCode;

use crate::assert_response_status_eq;
use crate::http::tests::run_http_service;

#[tokio::test]
async fn test_client_config() {
    let base_url = run_http_service(true).await.unwrap();
    let resp = Client::new()
        .get(format!("{base_url}/config.json"))
        .send()
        .await
        .unwrap();
    assert_response_status_eq!(resp, StatusCode::OK);
    let cfg: ClientConfig = resp.json().await.unwrap();
    assert_eq!(cfg, ClientConfig::new(base_url));
}
