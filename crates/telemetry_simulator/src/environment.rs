/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::tools::{error::AppError, logger::LoggerConfig};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const HEALTH_PATH: &str = "health";
pub const TELEMETRY_PATH: &str = "telemetry";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub num_trips: u64,
    pub points_per_trip: u64,
    pub delay_secs: f64,
    pub request_timeout_secs: Option<u64>,
    pub logger_cfg: LoggerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            num_trips: 3,
            points_per_trip: 10,
            delay_secs: 1.0,
            request_timeout_secs: None,
            logger_cfg: LoggerConfig::default(),
        }
    }
}

pub fn read_dhall_config(config_path: &str) -> Result<AppConfig, AppError> {
    serde_dhall::from_file(config_path)
        .parse::<AppConfig>()
        .map_err(|err| AppError::InvalidConfiguration(format!("Error reading config: {err}")))
}

/// Resolves `path` beneath `base_url`, keeping any path prefix the base already has.
pub fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, AppError> {
    if base_url.cannot_be_a_base() {
        return Err(AppError::InvalidConfiguration(format!(
            "Base url cannot carry a path : {base_url}"
        )));
    }

    let mut base_url = base_url.to_owned();
    if !base_url.path().ends_with('/') {
        let directory = format!("{}/", base_url.path());
        base_url.set_path(&directory);
    }

    base_url
        .join(path)
        .map_err(|err| AppError::InvalidConfiguration(format!("Invalid endpoint {path} : {err}")))
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub client: Client,
    pub health_url: Url,
    pub telemetry_url: Url,
}

impl AppState {
    pub fn new(app_config: &AppConfig) -> Result<AppState, AppError> {
        let base_url = Url::parse(app_config.base_url.as_str()).map_err(|err| {
            AppError::InvalidConfiguration(format!(
                "Failed to parse base_url {} : {err}",
                app_config.base_url
            ))
        })?;

        let mut client = Client::builder();
        if let Some(timeout) = app_config.request_timeout_secs {
            client = client.timeout(Duration::from_secs(timeout));
        }
        let client = client
            .build()
            .map_err(|err| AppError::InvalidConfiguration(err.to_string()))?;

        Ok(AppState {
            client,
            health_url: endpoint_url(&base_url, HEALTH_PATH)?,
            telemetry_url: endpoint_url(&base_url, TELEMETRY_PATH)?,
        })
    }
}
