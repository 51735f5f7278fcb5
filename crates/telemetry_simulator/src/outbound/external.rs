/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::common::types::*;
use crate::tools::{callapi::call_api, error::AppError};
use reqwest::{Client, Method, StatusCode, Url};

pub async fn health_check(client: &Client, health_url: &Url) -> Result<StatusCode, AppError> {
    let resp = call_api::<()>(client, Method::GET, health_url, vec![], None).await?;
    Ok(resp.status())
}

/// Posts one point; only a `200 OK` counts as accepted, anything else is
/// `TelemetryRejected` with the response text.
pub async fn push_telemetry(
    client: &Client,
    telemetry_url: &Url,
    point: &TelemetryPoint,
) -> Result<(), AppError> {
    let resp = call_api::<TelemetryPoint>(
        client,
        Method::POST,
        telemetry_url,
        vec![("content-type", "application/json")],
        Some(point),
    )
    .await?;

    let status = resp.status();
    if status == StatusCode::OK {
        Ok(())
    } else {
        let body = resp
            .text()
            .await
            .map_err(|err| AppError::ExternalAPICallError(err.to_string()))?;
        Err(AppError::TelemetryRejected(status.as_u16(), body))
    }
}
