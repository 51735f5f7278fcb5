/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use std::{env::var, path::Path, process::ExitCode};
use telemetry_simulator::{
    domain::{action::simulate::simulate, types::simulation::SimulationParams},
    environment::{read_dhall_config, AppConfig, AppState},
    tools::{error::AppError, logger::*},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dhall_config_path = var("DHALL_CONFIG")
        .unwrap_or_else(|_| "./dhall_configs/telemetry_simulator.dhall".to_string());

    let config_found = Path::new(&dhall_config_path).exists();
    let app_config = if config_found {
        match read_dhall_config(&dhall_config_path) {
            Ok(app_config) => app_config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        AppConfig::default()
    };

    let _guard = setup_tracing(app_config.logger_cfg);

    if !config_found {
        warn!(
            tag = "[Config]",
            "No config at {dhall_config_path}, using built-in defaults"
        );
    }

    let app_state = match AppState::new(&app_config) {
        Ok(app_state) => app_state,
        Err(err) => {
            error!(tag = "[Config]", error_code = err.code(), "{err}");
            return ExitCode::FAILURE;
        }
    };

    match simulate(&app_state, &SimulationParams::from(&app_config)).await {
        Ok(_) => ExitCode::SUCCESS,
        // already reported by simulate
        Err(AppError::HealthCheckFailed(_)) => ExitCode::FAILURE,
        Err(err) => {
            error!(tag = "[Simulation Aborted]", error_code = err.code(), "{err}");
            ExitCode::FAILURE
        }
    }
}
