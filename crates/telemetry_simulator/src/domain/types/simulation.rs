/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::{common::types::TripId, environment::AppConfig};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub num_trips: u64,
    pub points_per_trip: u64,
    pub delay: Duration,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            num_trips: 3,
            points_per_trip: 10,
            delay: Duration::from_secs(1),
        }
    }
}

impl From<&AppConfig> for SimulationParams {
    fn from(app_config: &AppConfig) -> Self {
        SimulationParams {
            num_trips: app_config.num_trips,
            points_per_trip: app_config.points_per_trip,
            delay: Duration::try_from_secs_f64(app_config.delay_secs).unwrap_or(Duration::ZERO),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationReport {
    pub trip_ids: Vec<TripId>,
    pub attempted: u64,
    pub sent: u64,
    pub failed: u64,
}
