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

use s3_endpoint_demo::config::FetchConfig;
use s3_endpoint_demo::fetcher::{Outcome, fetch_and_print};
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init(); // set RUST_LOG="info" to see the request being made

    let config = FetchConfig::from_env();
    let outcome = fetch_and_print(&config, &mut io::stdout(), &mut io::stderr())
        .await
        .unwrap_or_else(|e| {
            log::error!("failed to write output: {e}");
            Outcome::TransportFailure
        });

    ExitCode::from(outcome.exit_code())
}
