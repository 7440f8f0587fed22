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

//! Settings of a single fetch: where to connect, how to sign, what to read.

use crate::error::FetchError;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{Credentials, Region};
use http::Uri;

pub const DEFAULT_ENDPOINT: &str = "https://s3.localhost.localstack.cloud:4566";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_ACCESS_KEY: &str = "test";
pub const DEFAULT_SECRET_KEY: &str = "test";
pub const DEFAULT_BUCKET: &str = "testy-mctestface-bucket";
pub const DEFAULT_KEY: &str = "s3test.txt";

/// Endpoint, region, credentials and the object to fetch.
///
/// The defaults target a LocalStack instance with its placeholder
/// credentials. Pointing `endpoint` at an AWS host is the only switch
/// between local and real S3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub key: String,
    /// Address buckets as `<endpoint>/<bucket>` instead of `<bucket>.<endpoint host>`.
    pub force_path_style: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            access_key: DEFAULT_ACCESS_KEY.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            key: DEFAULT_KEY.to_string(),
            force_path_style: false,
        }
    }
}

impl FetchConfig {
    /// Reads the configuration from the environment.
    ///
    /// | variable              | default                                      |
    /// |-----------------------|----------------------------------------------|
    /// | `S3_ENDPOINT`         | `https://s3.localhost.localstack.cloud:4566` |
    /// | `S3_REGION`           | `us-east-1`                                  |
    /// | `S3_ACCESS_KEY`       | `test`                                       |
    /// | `S3_SECRET_KEY`       | `test`                                       |
    /// | `S3_BUCKET`           | `testy-mctestface-bucket`                    |
    /// | `S3_KEY`              | `s3test.txt`                                 |
    /// | `S3_FORCE_PATH_STYLE` | unset (virtual-hosted buckets)               |
    pub fn from_env() -> Self {
        let endpoint = std::env::var("S3_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT.to_string());
        let region = std::env::var("S3_REGION").unwrap_or(DEFAULT_REGION.to_string());
        let access_key = std::env::var("S3_ACCESS_KEY").unwrap_or(DEFAULT_ACCESS_KEY.to_string());
        let secret_key = std::env::var("S3_SECRET_KEY").unwrap_or(DEFAULT_SECRET_KEY.to_string());
        let bucket = std::env::var("S3_BUCKET").unwrap_or(DEFAULT_BUCKET.to_string());
        let key = std::env::var("S3_KEY").unwrap_or(DEFAULT_KEY.to_string());
        let force_path_style = std::env::var("S3_FORCE_PATH_STYLE").is_ok();

        Self {
            endpoint,
            region,
            access_key,
            secret_key,
            bucket,
            key,
            force_path_style,
        }
    }

    /// Checks what can be checked without a request: an `http`/`https`
    /// endpoint with a host, and non-empty bucket, key and region.
    pub fn validate(&self) -> Result<(), FetchError> {
        let uri: Uri = self.endpoint.parse().map_err(|e| {
            FetchError::InvalidConfig(format!("endpoint '{}': {e}", self.endpoint))
        })?;
        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            _ => {
                return Err(FetchError::InvalidConfig(format!(
                    "endpoint '{}': scheme must be http or https",
                    self.endpoint
                )));
            }
        }
        if uri.host().is_none_or(str::is_empty) {
            return Err(FetchError::InvalidConfig(format!(
                "endpoint '{}': host is missing",
                self.endpoint
            )));
        }

        if self.region.is_empty() {
            return Err(FetchError::InvalidConfig("region cannot be empty".into()));
        }
        if self.bucket.is_empty() {
            return Err(FetchError::InvalidConfig("bucket name cannot be empty".into()));
        }
        if self.key.is_empty() {
            return Err(FetchError::InvalidConfig("object key cannot be empty".into()));
        }
        Ok(())
    }

    /// Builds a client bound to the configured endpoint, signing every
    /// request with the static credentials for the configured region.
    /// Retries are disabled: one call, one answer.
    pub async fn client(&self) -> Client {
        let credentials = Credentials::new(
            &self.access_key,
            &self.secret_key,
            None,
            None,
            "s3-endpoint-demo",
        );

        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&self.endpoint)
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        Client::from_conf(
            aws_sdk_s3::config::Builder::from(&shared)
                .force_path_style(self.force_path_style)
                .build(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_localstack() {
        let config = FetchConfig::default();
        assert_eq!(config.endpoint, "https://s3.localhost.localstack.cloud:4566");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.access_key, "test");
        assert_eq!(config.secret_key, "test");
        assert_eq!(config.bucket, "testy-mctestface-bucket");
        assert_eq!(config.key, "s3test.txt");
        assert!(!config.force_path_style);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoints() {
        for endpoint in ["ftp://localhost:4566", "localhost:4566", "not a uri"] {
            let config = FetchConfig {
                endpoint: endpoint.into(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(FetchError::InvalidConfig(_))),
                "endpoint {endpoint} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_names() {
        let config = FetchConfig {
            bucket: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FetchError::InvalidConfig(m)) if m.contains("bucket")));

        let config = FetchConfig {
            key: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FetchError::InvalidConfig(m)) if m.contains("key")));
    }

    #[tokio::test]
    async fn test_client_uses_configured_region() {
        let config = FetchConfig {
            endpoint: "http://127.0.0.1:4566".into(),
            region: "eu-west-1".into(),
            force_path_style: true,
            ..Default::default()
        };
        let client = config.client().await;
        assert_eq!(
            client.config().region().cloned(),
            Some(Region::new("eu-west-1"))
        );
    }
}
