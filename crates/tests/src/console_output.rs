/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::{
    ingestion_service::{truncated_body_url, unreachable_url, IngestionService},
    log_capture::LogCapture,
};
use actix_web::http::StatusCode;
use serde_json::Value;
use std::time::Duration;
use telemetry_simulator::{
    domain::{action::simulate::simulate, types::simulation::SimulationParams},
    environment::{endpoint_url, AppConfig, AppState, TELEMETRY_PATH},
};

fn app_state_for(base_url: &str) -> AppState {
    AppState::new(&AppConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: Some(5),
        ..AppConfig::default()
    })
    .expect("Failed to build app state")
}

fn params(num_trips: u64, points_per_trip: u64) -> SimulationParams {
    SimulationParams {
        num_trips,
        points_per_trip,
        delay: Duration::ZERO,
    }
}

fn sent_payload(line: &str) -> Value {
    let start = line.find("Sent: ").expect("line carries a Sent message") + "Sent: ".len();
    let end = start + line[start..].find('}').expect("payload is a JSON object") + 1;
    serde_json::from_str(&line[start..end]).expect("payload parses as JSON")
}

#[actix_web::test]
async fn unavailable_service_logs_only_the_health_check_failure() {
    let service = IngestionService::start(StatusCode::SERVICE_UNAVAILABLE, StatusCode::OK);
    let app_state = app_state_for(&service.base_url);
    let logs = LogCapture::start();

    let result = simulate(&app_state, &params(3, 10)).await;

    assert!(result.is_err());
    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "lines : {lines:?}");
    assert!(lines[0].contains("Health check failed"));

    drop(logs);
    service.stop().await;
}

#[actix_web::test]
async fn healthy_run_logs_summary_and_one_sent_line_per_point() {
    let service = IngestionService::healthy();
    let app_state = app_state_for(&service.base_url);
    let logs = LogCapture::start();

    simulate(&app_state, &params(2, 1)).await.unwrap();

    assert_eq!(logs.lines_containing("Health check passed").len(), 1);
    assert_eq!(
        logs.lines_containing("Simulating 2 trips with 1 data points each...")
            .len(),
        1
    );

    let sent = logs.lines_containing("Sent: ");
    assert_eq!(sent.len(), 2);
    let first = sent_payload(&sent[0]);
    let second = sent_payload(&sent[1]);
    for payload in [&first, &second] {
        for field in ["lat", "lon", "speed", "timestamp", "trip_id"] {
            assert!(payload.get(field).is_some(), "missing {field} : {payload}");
        }
    }
    assert_ne!(first["trip_id"], second["trip_id"]);

    assert!(logs.lines_containing("Failed to send data").is_empty());
    assert!(logs.lines_containing("Error sending data").is_empty());

    drop(logs);
    service.stop().await;
}

#[actix_web::test]
async fn rejected_points_log_the_response_body_once_each() {
    let service = IngestionService::start(StatusCode::OK, StatusCode::UNPROCESSABLE_ENTITY);
    let app_state = app_state_for(&service.base_url);
    let logs = LogCapture::start();

    simulate(&app_state, &params(1, 3)).await.unwrap();

    assert_eq!(
        logs.lines_containing("Failed to send data: request failed")
            .len(),
        3
    );
    assert!(logs.lines_containing("Sent: ").is_empty());
    // health passed, summary, three failures, completion
    assert_eq!(logs.lines().len(), 6);

    drop(logs);
    service.stop().await;
}

#[actix_web::test]
async fn undeliverable_points_log_the_transport_error_once_each() {
    let service = IngestionService::healthy();
    let mut app_state = app_state_for(&service.base_url);
    app_state.telemetry_url = endpoint_url(
        &reqwest::Url::parse(&unreachable_url()).unwrap(),
        TELEMETRY_PATH,
    )
    .unwrap();
    let logs = LogCapture::start();

    simulate(&app_state, &params(2, 1)).await.unwrap();

    assert_eq!(logs.lines_containing("Error sending data: ").len(), 2);
    assert!(logs.lines_containing("Failed to send data").is_empty());

    drop(logs);
    service.stop().await;
}

#[actix_web::test]
async fn unreadable_rejection_body_is_reported_as_a_send_error() {
    let service = IngestionService::healthy();
    let mut app_state = app_state_for(&service.base_url);
    app_state.telemetry_url = endpoint_url(
        &reqwest::Url::parse(&truncated_body_url()).unwrap(),
        TELEMETRY_PATH,
    )
    .unwrap();
    let logs = LogCapture::start();

    let report = simulate(&app_state, &params(1, 1)).await.unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(logs.lines_containing("Error sending data: ").len(), 1);
    assert!(logs.lines_containing("Failed to send data").is_empty());

    drop(logs);
    service.stop().await;
}
