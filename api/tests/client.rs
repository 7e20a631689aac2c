// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client integration tests with wiremock.

use chrono::{TimeZone, Utc};
use openbaby_api::{Api, ApiConfig, ApiError};
use openbaby_core::{
    BottleFeedEvent, DiaperEvent, DiaperType, EventKind, PumpEvent,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> Api {
    let config = ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    Api::new(config).expect("Failed to create client")
}

fn bottle_event(id: &str) -> BottleFeedEvent {
    BottleFeedEvent {
        id: id.to_string(),
        name: EventKind::BottleFeed,
        description: String::new(),
        time_start: Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap(),
        time_end: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap()),
        notes: None,
        amount_ml: 120,
        is_formula: false,
    }
}

#[tokio::test]
async fn client_create_bottle_feed() {
    let mock_server = MockServer::start().await;

    let submitted = bottle_event("");
    let confirmed = bottle_event("evt-1");

    Mock::given(method("POST"))
        .and(path("/events/feed/bottle"))
        .and(body_json(&submitted))
        .respond_with(ResponseTemplate::new(200).set_body_json(&confirmed))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let event = api
        .feed()
        .create_bottle(&submitted)
        .await
        .expect("Failed to create bottle feed");

    assert_eq!(event.id, "evt-1");
    assert_eq!(event.amount_ml, 120);
    assert_eq!(event.time_end, Some(event.time_start));
}

#[tokio::test]
async fn client_list_bottle_feeds_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/feed/bottle"))
        .and(query_param("limit", "1"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![bottle_event("evt-9")]))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let events = api
        .feed()
        .list_bottle(1, 0)
        .await
        .expect("Failed to list bottle feeds");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "evt-9");
}

#[tokio::test]
async fn client_surfaces_backend_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events/pump/"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"detail": "amount_ml must be >= 0"})),
        )
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let pump = PumpEvent {
        id: String::new(),
        name: EventKind::Pump,
        description: "Pump event".to_string(),
        time_start: Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap(),
        time_end: None,
        notes: None,
        amount_ml: -5.0,
    };

    let err = api.pump().create(&pump).await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "amount_ml must be >= 0");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn client_maps_missing_event_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events/diaper/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let err = api.diaper().get("nope").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)), "got {err}");
}

#[tokio::test]
async fn client_rejects_update_without_id() {
    let mock_server = MockServer::start().await;

    let api = api_for(&mock_server);
    let diaper = DiaperEvent {
        id: String::new(),
        name: EventKind::DiaperChange,
        description: "Diaper change event".to_string(),
        time_start: Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap(),
        time_end: None,
        notes: None,
        diaper_type: DiaperType::Pee,
        diaper_contents_color: None,
        diaper_contents_consistency: None,
        diaper_contents_size: None,
    };

    let err = api.diaper().update(&diaper).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingId));
    assert_eq!(err.to_string(), "Event ID is required");
}

#[tokio::test]
async fn client_fetches_feed_statistics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/feeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "time": "2024-03-01T09:15:00Z",
                "amount_ml": 120.0,
                "time_since_last_feed_minutes": 185.5
            }
        ])))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let stats = api
        .stats()
        .feed_stats(None, None)
        .await
        .expect("Failed to fetch feed stats");

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].amount_ml, 120.0);
    assert_eq!(stats[0].time_since_last_feed_minutes, 185.5);
}

#[tokio::test]
async fn client_round_trips_generic_event() {
    let mock_server = MockServer::start().await;

    let mut event = openbaby_core::Event {
        id: String::new(),
        name: EventKind::Pump,
        description: "Pump event".to_string(),
        time_start: Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap(),
        time_end: None,
        notes: None,
    };
    let mut confirmed = event.clone();
    confirmed.id = "evt-5".to_string();

    Mock::given(method("POST"))
        .and(path("/events/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&confirmed))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events/evt-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&confirmed))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/events/evt-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&confirmed))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    event = api.events().create(&event).await.expect("Failed to create");
    assert_eq!(event.id, "evt-5");

    let fetched = api.events().get("evt-5").await.expect("Failed to get");
    assert_eq!(fetched, event);

    let updated = api.events().update(&fetched).await.expect("Failed to update");
    assert_eq!(updated.id, "evt-5");
}

#[tokio::test]
async fn client_deletes_kind_specific_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/events/diaper/evt-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/events/pump/evt-2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    api.diaper().delete("evt-1").await.expect("Failed to delete diaper event");
    api.pump().delete("evt-2").await.expect("Failed to delete pump event");
}

#[tokio::test]
async fn client_bounds_event_list_by_time() {
    let mock_server = MockServer::start().await;

    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    Mock::given(method("GET"))
        .and(path("/events/"))
        .and(query_param("limit", "100"))
        .and(query_param("start_time", start.to_rfc3339()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "evt-3",
                "name": "diaper_change",
                "description": "Diaper change event",
                "time_start": "2024-03-01T12:00:00Z"
            }
        ])))
        .mount(&mock_server)
        .await;

    let api = api_for(&mock_server);
    let events = api
        .events()
        .list(100, 0, Some(start), None)
        .await
        .expect("Failed to list events");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, EventKind::DiaperChange);
}
