/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use super::types::*;
use rand::Rng;

pub fn round_to_precision(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Builds one synthetic reading for `trip_id`, stamped with the current wall-clock time.
///
/// Coordinates fall inside a box over central Bengaluru and are rounded to 6 decimals;
/// speed is in km/h rounded to 2 decimals. Rounding never leaves the range since both
/// bounds are already representable at that precision.
pub fn generate_telemetry_point<R: Rng>(rng: &mut R, trip_id: &TripId) -> TelemetryPoint {
    TelemetryPoint {
        lat: Latitude(round_to_precision(
            rng.gen_range(LATITUDE_RANGE),
            COORDINATE_PRECISION,
        )),
        lon: Longitude(round_to_precision(
            rng.gen_range(LONGITUDE_RANGE),
            COORDINATE_PRECISION,
        )),
        speed: SpeedInKmPerHour(round_to_precision(
            rng.gen_range(SPEED_RANGE),
            SPEED_PRECISION,
        )),
        timestamp: TimeStamp::now(),
        trip_id: trip_id.to_owned(),
    }
}
