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

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use s3_endpoint_demo::config::FetchConfig;

pub const BUCKET: &str = "testy-mctestface-bucket";
pub const KEY: &str = "s3test.txt";

/// Path of the default object on a path-style endpoint.
pub fn object_path() -> String {
    format!("/{BUCKET}/{KEY}")
}

/// Configuration pointing at a stub server with path-style addressing,
/// otherwise the defaults.
pub fn config_for(server: &ServerGuard) -> FetchConfig {
    FetchConfig {
        endpoint: server.url(),
        force_path_style: true,
        ..Default::default()
    }
}

/// GET mock on `path`, whatever query string the client appends.
pub fn get_mock(server: &mut ServerGuard, path: &str) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
}

/// S3 `<Error>` document as sent by LocalStack.
pub fn error_xml(code: &str, message: &str, resource: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>{code}</Code><Message>{message}</Message><Resource>{resource}</Resource><RequestId>0f2c1a7e-5f4e-4f6a-9d2b-7c3e1b9a8d10</RequestId></Error>"#
    )
}
