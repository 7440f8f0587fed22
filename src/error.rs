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

//! Error definitions for fetching an object

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStreamError;
use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Error answer of the S3 service to a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceError {
    http_status_code: u16,
    code: Option<String>,
    message: Option<String>,
}

impl ServiceError {
    pub fn new(http_status_code: u16, code: Option<&str>, message: Option<&str>) -> Self {
        Self {
            http_status_code,
            code: code.filter(|c| !c.is_empty()).map(String::from),
            message: message.filter(|m| !m.is_empty()).map(String::from),
        }
    }

    pub fn http_status_code(&self) -> u16 {
        self.http_status_code
    }

    /// Error code of the `<Error>` document, e.g. `NoSuchKey`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Shows the service message. Responses without one, such as a bare
/// `503` from a proxy, fall back to the code and then to the HTTP status.
impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(m) = &self.message {
            return f.write_str(m);
        }
        if let Some(c) = &self.code {
            return f.write_str(c);
        }
        match StatusCode::from_u16(self.http_status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
        {
            Some(reason) => write!(f, "{} {reason}", self.http_status_code),
            None => write!(f, "HTTP status {}", self.http_status_code),
        }
    }
}

/// Failure of a single fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Rejected before any request was sent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The service answered with a non-2xx status.
    #[error("{0}")]
    Service(ServiceError),

    /// No answer from the service: connection, DNS, TLS, timeouts or a
    /// request that could not be built.
    #[error("transport failure")]
    Transport(#[source] SdkError<GetObjectError>),

    /// The object body broke off while it was being read.
    #[error("failed to read object body")]
    Body(#[source] ByteStreamError),
}

impl FetchError {
    /// Whether the service itself reported the failure.
    pub fn is_service_error(&self) -> bool {
        matches!(self, FetchError::Service(_))
    }
}

impl From<SdkError<GetObjectError>> for FetchError {
    fn from(err: SdkError<GetObjectError>) -> Self {
        match err {
            SdkError::ServiceError(ctx) => {
                let e = ctx.err();
                FetchError::Service(ServiceError::new(
                    ctx.raw().status().as_u16(),
                    e.code(),
                    e.message(),
                ))
            }
            other => FetchError::Transport(other),
        }
    }
}
