// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Fetches one object and prints it, reporting failures in two tiers.

use crate::config::FetchConfig;
use crate::error::FetchError;
use bytes::Bytes;
use std::io::Write;

/// How a run of [`fetch_and_print`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    ServiceError,
    TransportFailure,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Printed => 0,
            Outcome::ServiceError => 1,
            Outcome::TransportFailure => 2,
        }
    }
}

/// Decodes object bytes as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Fetches the configured object and returns its raw bytes.
///
/// The client is created for this call only and dropped before returning.
pub async fn fetch_object(config: &FetchConfig) -> Result<Bytes, FetchError> {
    config.validate()?;
    let client = config.client().await;
    log::info!(
        "fetching s3://{}/{} from {}",
        config.bucket,
        config.key,
        config.endpoint
    );

    let resp = client
        .get_object()
        .bucket(&config.bucket)
        .key(&config.key)
        .send()
        .await?;
    let body: Bytes = resp
        .body
        .collect()
        .await
        .map_err(FetchError::Body)?
        .into_bytes();
    drop(client);

    log::info!(
        "fetched {} bytes of s3://{}/{}",
        body.len(),
        config.bucket,
        config.key
    );
    Ok(body)
}

/// Fetches the configured object and returns its content as text, see [`decode_text`].
pub async fn fetch_object_text(config: &FetchConfig) -> Result<String, FetchError> {
    Ok(decode_text(&fetch_object(config).await?))
}

/// Fetches the configured object and writes `File content: \n<content>` to
/// `out`. A service error writes the service's message to `err`; any other
/// failure writes the error and each of its causes to `err`.
pub async fn fetch_and_print<O: Write, E: Write>(
    config: &FetchConfig,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<Outcome> {
    match fetch_object_text(config).await {
        Ok(content) => {
            writeln!(out, "File content: \n{content}")?;
            out.flush()?;
            Ok(Outcome::Printed)
        }
        Err(e) if e.is_service_error() => {
            log::error!("service rejected the request: {e}");
            writeln!(err, "{e}")?;
            Ok(Outcome::ServiceError)
        }
        Err(e) => {
            log::error!("request failed: {e}");
            write_error_chain(err, &e)?;
            Ok(Outcome::TransportFailure)
        }
    }
}

fn write_error_chain<E: Write>(err: &mut E, e: &dyn std::error::Error) -> std::io::Result<()> {
    writeln!(err, "Error: {e}")?;
    let mut source = e.source();
    while let Some(cause) = source {
        writeln!(err, "Caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}
