/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid Request : {0}")]
    InvalidRequest(String),
    #[error("Serialization Error : {0}")]
    SerializationError(String),
    #[error("External API Call Error : {0}")]
    ExternalAPICallError(String),
    #[error("Invalid Configuration : {0}")]
    InvalidConfiguration(String),
    #[error("Health check failed with status {0}")]
    HealthCheckFailed(u16),
    #[error("Health check could not reach the service : {0}")]
    HealthCheckUnreachable(String),
    #[error("Telemetry rejected with status {0} : {1}")]
    TelemetryRejected(u16, String),
}

impl AppError {
    pub fn code(&self) -> String {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::SerializationError(_) => "SERIALIZATION_ERROR",
            AppError::ExternalAPICallError(_) => "EXTERNAL_API_CALL_ERROR",
            AppError::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            AppError::HealthCheckFailed(_) => "HEALTH_CHECK_FAILED",
            AppError::HealthCheckUnreachable(_) => "HEALTH_CHECK_UNREACHABLE",
            AppError::TelemetryRejected(_, _) => "TELEMETRY_REJECTED",
        }
        .to_string()
    }
}
