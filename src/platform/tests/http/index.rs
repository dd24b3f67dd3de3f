use reqwest::Client;
use reqwest::StatusCode;

use crate::assert_response_status_eq;
use crate::http::tests::run_http_service;

#[tokio::test]
async fn test_index_page() {
    let base_url = run_http_service(true).await.unwrap();
    let cl = Client::new();

    let resp = cl
        .get(format!("{base_url}/?filename=it_festivals.csv"))
        .send()
        .await
        .unwrap();
    assert_response_status_eq!(resp, StatusCode::OK);
    assert_eq!(
        resp.text().await.unwrap(),
        r#"<html><script>window.initialMapEvents = [{"name":"Umbria Jazz","lat":"43.11","lon":"12.39","radius":0.0}];</script><p>it_festivals.csv</p></html>"#
    );

    let resp = cl
        .get(format!("{base_url}/static/app.js"))
        .send()
        .await
        .unwrap();
    assert_response_status_eq!(resp, StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "// app");
}

#[tokio::test]
async fn test_no_ui() {
    let base_url = run_http_service(false).await.unwrap();
    let resp = Client::new().get(format!("{base_url}/")).send().await.unwrap();
    assert_response_status_eq!(resp, StatusCode::NOT_FOUND);
}
