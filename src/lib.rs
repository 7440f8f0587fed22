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

//! # s3-endpoint-demo
//!
//! Fetches a single object from an S3 compatible endpoint, such as a local
//! LocalStack instance, and prints it as text.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use s3_endpoint_demo::config::FetchConfig;
//! use s3_endpoint_demo::fetcher::fetch_object_text;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = FetchConfig::from_env();
//!     match fetch_object_text(&config).await {
//!         Ok(content) => println!("File content: \n{content}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```
//!
//! ## Design
//! - [`config::FetchConfig`] holds endpoint, region, credentials, bucket and key,
//!   and builds the `aws_sdk_s3` client bound to them
//! - [`fetcher`] performs the single GetObject call and prints the result
//! - [`error::FetchError`] separates answers of the service from failures to get one

#![allow(clippy::result_large_err)]

pub mod config;
pub mod error;
pub mod fetcher;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
