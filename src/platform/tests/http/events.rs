use common::types::CreateEventResponse;
use common::types::EventFeature;
use common::types::EventProperties;
use common::types::EventRecord;
use common::types::Polygon;
use platform::http::events::MSG_EVENT_REGISTERED;
use platform::http::events::MSG_INVALID_PAYLOAD;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use reqwest::StatusCode;

use crate::assert_response_status_eq;
use crate::http::tests::run_http_service;
use crate::http::tests::EMPTY_LIST;

fn event() -> EventFeature {
    EventFeature::new(
        Polygon::new(vec![vec![
            vec![-2.6, 51.1],
            vec![-2.5, 51.1],
            vec![-2.5, 51.2],
            vec![-2.6, 51.1],
        ]]),
        EventProperties {
            name: "Pop-up gig".to_string(),
            start_date: "2025-07-01".to_string(),
            end_date: "2025-07-02".to_string(),
        },
    )
}

#[tokio::test]
async fn test_list_events() {
    let base_url = run_http_service(false).await.unwrap();
    let cl = Client::new();

    // default dataset, the short row is skipped
    {
        let resp = cl
            .get(format!("{base_url}/api/events"))
            .send()
            .await
            .unwrap();
        assert_response_status_eq!(resp, StatusCode::OK);
        let events: Vec<EventRecord> = resp.json().await.unwrap();
        assert_eq!(events, vec![
            EventRecord {
                name: "Glastonbury".to_string(),
                lat: "51.15".to_string(),
                lon: "-2.58".to_string(),
                radius: 3.5,
            },
            EventRecord {
                name: "Reading".to_string(),
                lat: "51.46".to_string(),
                lon: "-0.97".to_string(),
                radius: 0.0,
            },
        ]);
    }

    // named dataset
    {
        let resp = cl
            .get(format!("{base_url}/api/events?filename=it_festivals.csv"))
            .send()
            .await
            .unwrap();
        assert_response_status_eq!(resp, StatusCode::OK);
        let events: Vec<EventRecord> = resp.json().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Umbria Jazz");
    }

    // unknown dataset is served as an empty list
    {
        let resp = cl
            .get(format!("{base_url}/api/events?filename=nope.csv"))
            .send()
            .await
            .unwrap();
        assert_response_status_eq!(resp, StatusCode::OK);
        let v: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(v, *EMPTY_LIST);
    }

    // dataset names can't leave the data directory
    {
        let resp = cl
            .get(format!("{base_url}/api/events?filename=..%2Fsecret.csv"))
            .send()
            .await
            .unwrap();
        assert_response_status_eq!(resp, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_create_event() {
    let base_url = run_http_service(false).await.unwrap();
    let url = format!("{base_url}/api/events/new");
    let cl = Client::new();

    // valid event is echoed back
    {
        let resp = cl.post(&url).json(&event()).send().await.unwrap();
        assert_response_status_eq!(resp, StatusCode::OK);
        let resp: CreateEventResponse = resp.json().await.unwrap();
        assert_eq!(
            resp,
            CreateEventResponse::success(MSG_EVENT_REGISTERED, event())
        );
    }

    // malformed body
    {
        let resp = cl
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(r#"{"type":"Feature"}"#)
            .send()
            .await
            .unwrap();
        assert_response_status_eq!(resp, StatusCode::BAD_REQUEST);
        let resp: CreateEventResponse = resp.json().await.unwrap();
        assert_eq!(resp.status, "error");
        assert_eq!(resp.message.as_deref(), Some(MSG_INVALID_PAYLOAD));
        assert!(resp.error.is_some());
    }

    // decodes but fails validation
    {
        let mut ev = event();
        ev.properties.name = "".to_string();
        let resp = cl.post(&url).json(&ev).send().await.unwrap();
        assert_response_status_eq!(resp, StatusCode::BAD_REQUEST);
        let resp: CreateEventResponse = resp.json().await.unwrap();
        assert_eq!(resp.status, "error");
        assert_eq!(resp.message.as_deref(), Some("event name is empty"));
    }
}
