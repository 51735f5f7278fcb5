/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, ops::RangeInclusive};
use uuid::Uuid;

pub const LATITUDE_RANGE: RangeInclusive<f64> = 12.90..=13.10;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = 77.50..=77.70;
pub const SPEED_RANGE: RangeInclusive<f64> = 20.0..=80.0;

pub const COORDINATE_PRECISION: i32 = 6;
pub const SPEED_PRECISION: i32 = 2;

#[derive(Deserialize, Serialize, Clone, Debug, Eq, Hash, PartialEq)]
pub struct TripId(pub String);

impl TripId {
    pub fn new() -> Self {
        TripId(Uuid::new_v4().to_string())
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
pub struct Latitude(pub f64);
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Copy)]
pub struct Longitude(pub f64);
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, PartialOrd, Copy)]
pub struct SpeedInKmPerHour(pub f64);

/// UTC instant rendered as RFC 3339 with an explicit `+00:00` offset rather than `Z`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct TimeStamp(pub DateTime<Utc>);

impl TimeStamp {
    pub fn now() -> Self {
        TimeStamp(Utc::now())
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_rfc3339_opts(SecondsFormat::Micros, false))
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&value)
            .map(|ts| TimeStamp(ts.with_timezone(&Utc)))
            .map_err(Error::custom)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TelemetryPoint {
    pub lat: Latitude,
    pub lon: Longitude,
    pub speed: SpeedInKmPerHour,
    pub timestamp: TimeStamp,
    pub trip_id: TripId,
}

impl fmt::Display for TelemetryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&payload)
    }
}
