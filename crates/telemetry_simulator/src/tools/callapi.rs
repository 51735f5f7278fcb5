/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::tools::error::AppError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use std::fmt::Debug;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

/// Sends one request through the shared `client` and hands back the raw response.
///
/// Any HTTP status is returned as `Ok` so that callers decide what counts as success;
/// only a transport failure (connection refused, timeout, malformed request) becomes
/// `AppError::ExternalAPICallError`. Each call is traced at DEBUG with its method, url,
/// status and latency; reporting the outcome is left to the caller.
///
/// # Arguments
///
/// * `client` - The client shared by the whole run.
/// * `method` - The HTTP method (e.g., GET, POST) for the request.
/// * `url` - The target URL.
/// * `headers` - Header key-value pairs.
/// * `body` - An optional request body, serialized to JSON when present.
pub async fn call_api<U>(
    client: &Client,
    method: Method,
    url: &Url,
    headers: Vec<(&str, &str)>,
    body: Option<&U>,
) -> Result<Response, AppError>
where
    U: Serialize + Debug,
{
    let start_time = Instant::now();

    let mut header_map = HeaderMap::new();

    for (header_key, header_value) in headers {
        let header_name = HeaderName::from_str(header_key)
            .map_err(|_| AppError::InvalidRequest(format!("Invalid Header Name : {header_key}")))?;
        let header_value = HeaderValue::from_str(header_value).map_err(|_| {
            AppError::InvalidRequest(format!("Invalid Header Value : {header_value}"))
        })?;

        header_map.insert(header_name, header_value);
    }

    let mut request = client
        .request(method.to_owned(), url.to_owned())
        .headers(header_map.to_owned());

    if let Some(body) = body {
        let body = serde_json::to_string(body)
            .map_err(|err| AppError::SerializationError(err.to_string()))?;
        request = request.body(body);
    }

    let resp = request.send().await;

    let latency = format!("{:?}ms", start_time.elapsed().as_millis());

    match resp {
        Ok(resp) => {
            debug!(tag = "[OUTGOING API]", request_method = %method, request_body = format!("{:?}", body), request_url = %url, status = %resp.status(), latency = latency);
            Ok(resp)
        }
        Err(err) => {
            debug!(tag = "[OUTGOING API - ERROR]", request_method = %method, request_body = format!("{:?}", body), request_url = %url, error = format!("{:?}", err), latency = latency);
            Err(AppError::ExternalAPICallError(err.to_string()))
        }
    }
}
