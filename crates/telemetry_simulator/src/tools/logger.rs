/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
#![allow(clippy::expect_used)]

use serde::{Deserialize, Serialize};
use tracing::subscriber::set_global_default;
pub use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, Registry};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
    OFF,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::TRACE => LevelFilter::TRACE,
            LogLevel::DEBUG => LevelFilter::DEBUG,
            LogLevel::INFO => LevelFilter::INFO,
            LogLevel::WARN => LevelFilter::WARN,
            LogLevel::ERROR => LevelFilter::ERROR,
            LogLevel::OFF => LevelFilter::OFF,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub log_to_file: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            level: LogLevel::INFO,
            log_to_file: false,
        }
    }
}

/// Installs the global bunyan-formatted subscriber for the simulator.
///
/// Every simulator log line (health check outcome, the run summary, one line per
/// telemetry point) goes to stdout as a JSON record. With `log_to_file` set the same
/// records are also written to `logs/telemetry_simulator-<version>.log`, rotated daily.
///
/// The returned `WorkerGuard` flushes the non-blocking stdout writer when dropped, so keep
/// it alive until the run is over.
///
/// # Panics
///
/// * If a global subscriber or `log` bridge was already installed.
pub fn setup_tracing(logger_cfg: LoggerConfig) -> WorkerGuard {
    LogTracer::init().expect("Failed to setup logger");

    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();

    let (non_blocking_console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let file_formatting_layer = logger_cfg.log_to_file.then(|| {
        BunyanFormattingLayer::new(
            app_name.to_owned(),
            tracing_appender::rolling::daily("logs", format!("{app_name}.log")),
        )
    });

    let subscriber = Registry::default()
        .with(LevelFilter::from(logger_cfg.level))
        .with(JsonStorageLayer)
        .with(file_formatting_layer)
        .with(BunyanFormattingLayer::new(
            app_name,
            non_blocking_console_writer,
        ));

    set_global_default(subscriber).expect("Unable to set global tracing subscriber");

    guard
}
