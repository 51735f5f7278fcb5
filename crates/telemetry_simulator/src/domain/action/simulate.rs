/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::{
    common::{types::*, utils::generate_telemetry_point},
    domain::types::simulation::*,
    environment::AppState,
    outbound::external::{health_check, push_telemetry},
    tools::error::AppError,
};
use rand::thread_rng;
use reqwest::StatusCode;
use tokio::time::sleep;
use tracing::{error, info};

/// Checks the ingestion service is up, then streams `num_trips * points_per_trip`
/// synthetic points to it one at a time.
///
/// A failed health check is fatal and returns before any point is generated: a non-200
/// status gives `HealthCheckFailed`, a transport failure gives `HealthCheckUnreachable`.
/// After that every point is attempted exactly once. A rejected or undeliverable point
/// is logged, counted as failed and skipped. The pause of `params.delay` follows every
/// point, the last one included.
pub async fn simulate(
    app_state: &AppState,
    params: &SimulationParams,
) -> Result<SimulationReport, AppError> {
    let status = health_check(&app_state.client, &app_state.health_url)
        .await
        .map_err(|err| AppError::HealthCheckUnreachable(err.to_string()))?;

    if status != StatusCode::OK {
        error!(tag = "[Health Check]", status = %status, "Health check failed");
        return Err(AppError::HealthCheckFailed(status.as_u16()));
    }
    info!(tag = "[Health Check]", "Health check passed");

    let trip_ids: Vec<TripId> = (0..params.num_trips).map(|_| TripId::new()).collect();

    info!(
        tag = "[Simulation]",
        "Simulating {} trips with {} data points each...",
        params.num_trips,
        params.points_per_trip
    );

    let mut report = SimulationReport::default();

    for trip_id in trip_ids.iter() {
        for _ in 0..params.points_per_trip {
            let point = generate_telemetry_point(&mut thread_rng(), trip_id);

            report.attempted += 1;
            match push_telemetry(&app_state.client, &app_state.telemetry_url, &point).await {
                Ok(()) => {
                    report.sent += 1;
                    info!(tag = "[Telemetry Sent]", trip_id = %trip_id, "Sent: {point}");
                }
                Err(AppError::TelemetryRejected(status, body)) => {
                    report.failed += 1;
                    error!(tag = "[Telemetry Rejected]", trip_id = %trip_id, status = status, "Failed to send data: {body}");
                }
                Err(err) => {
                    report.failed += 1;
                    error!(tag = "[Telemetry Error]", trip_id = %trip_id, error_code = err.code(), "Error sending data: {err}");
                }
            }

            sleep(params.delay).await;
        }
    }

    report.trip_ids = trip_ids;

    info!(
        tag = "[Simulation]",
        attempted = report.attempted,
        sent = report.sent,
        failed = report.failed,
        "Simulation complete"
    );

    Ok(report)
}
