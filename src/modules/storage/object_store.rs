//! S3-compatible object storage
//!
//! Uses rust-s3 for the object operations. Bucket bootstrap (create if
//! missing, public-read policy) is best-effort: uploads fall back to local
//! storage anyway, so startup never fails on a storage hiccup.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::Client;
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::core::config::RemoteStorageConfig;
use crate::core::error::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Remote half of the storage selector. The one production implementation is
/// [`S3ObjectStore`]; tests substitute their own to steer the fallback path.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload one object and return its canonical public URL
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<String>;

    /// Public URL for a key, without uploading anything
    fn public_url(&self, key: &str) -> String;
}

pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    config: RemoteStorageConfig,
    http_client: Client,
}

impl S3ObjectStore {
    pub fn new(config: RemoteStorageConfig) -> Result<Self> {
        let credentials = Credentials::new(
            config.access_key.as_deref(),
            config.secret_key.as_deref(),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to build S3 credentials: {}", e)))?;

        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config
                .region
                .parse()
                .map_err(|e| AppError::Internal(format!("Invalid AWS region: {}", e)))?,
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create S3 bucket handle: {}", e)))?;

        // Path-style URLs for S3-compatible servers (endpoint/bucket instead
        // of bucket.endpoint)
        if config.endpoint.is_some() {
            bucket.set_path_style();
        }

        let http_client = Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            bucket,
            region,
            credentials,
            config,
            http_client,
        })
    }

    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }

    /// Ensure the bucket exists, create if not. An already-exists answer from
    /// the server is fine; anything else is logged and assumed recoverable.
    pub async fn ensure_bucket_exists(&self) -> Result<()> {
        let result = if self.config.endpoint.is_some() {
            Bucket::create_with_path_style(
                &self.bucket.name(),
                self.region.clone(),
                self.credentials.clone(),
                BucketConfiguration::default(),
            )
            .await
        } else {
            Bucket::create(
                &self.bucket.name(),
                self.region.clone(),
                self.credentials.clone(),
                BucketConfiguration::default(),
            )
            .await
        };

        match result {
            Ok(_) => {
                debug!("Bucket '{}' created", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                    Ok(())
                }
            }
        }
    }

    /// Best-effort public-read policy so returned URLs are directly servable.
    /// rust-s3 has no PutBucketPolicy call, so the request is signed by hand
    /// (AWS Signature v4). Failure only warns: the policy can be set
    /// out-of-band and uploads are unaffected.
    pub async fn apply_public_read_policy(&self) {
        let (Some(access_key), Some(secret_key)) =
            (&self.config.access_key, &self.config.secret_key)
        else {
            warn!(
                "No static credentials configured; set a public-read policy on \
                 bucket '{}' manually if object URLs should be public",
                self.bucket.name()
            );
            return;
        };

        let bucket_name = self.bucket.name();
        let policy = serde_json::json!({
            "Version": "2012-10-17",
            "Statement": [{
                "Effect": "Allow",
                "Principal": {"AWS": "*"},
                "Action": ["s3:GetObject"],
                "Resource": [format!("arn:aws:s3:::{bucket_name}/*")]
            }]
        })
        .to_string();

        match self
            .put_bucket_policy(&bucket_name, &policy, access_key, secret_key)
            .await
        {
            Ok(()) => debug!("Public-read policy set on bucket '{}'", bucket_name),
            Err(e) => warn!(
                "Failed to set public-read policy on bucket '{}': {}",
                bucket_name, e
            ),
        }
    }

    async fn put_bucket_policy(
        &self,
        bucket_name: &str,
        policy: &str,
        access_key: &str,
        secret_key: &str,
    ) -> Result<()> {
        // Path-style against a custom endpoint, virtual-host style against AWS
        let (url, host, canonical_uri) = match &self.config.endpoint {
            Some(endpoint) => {
                let parsed = reqwest::Url::parse(endpoint)
                    .map_err(|e| AppError::Internal(format!("Invalid S3 endpoint URL: {}", e)))?;
                let host = parsed
                    .host_str()
                    .ok_or_else(|| AppError::Internal("S3 endpoint URL has no host".to_string()))?;
                let host = match parsed.port() {
                    Some(p) => format!("{}:{}", host, p),
                    None => host.to_string(),
                };
                (
                    format!("{}/{}?policy", endpoint, bucket_name),
                    host,
                    format!("/{}", bucket_name),
                )
            }
            None => {
                let host = format!("{}.s3.amazonaws.com", bucket_name);
                (format!("https://{}/?policy", host), host, "/".to_string())
            }
        };

        let now = Utc::now();
        let date_stamp = now.format("%Y%m%d").to_string();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let payload_hash = hex::encode(Sha256::digest(policy.as_bytes()));

        let canonical_request = format!(
            "PUT\n{}\npolicy=\nhost:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n\nhost;x-amz-content-sha256;x-amz-date\n{}",
            canonical_uri, host, payload_hash, amz_date, payload_hash
        );

        let credential_scope = format!("{}/{}/s3/aws4_request", date_stamp, self.config.region);
        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n{}\n{}\n{}",
            amz_date,
            credential_scope,
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let mut signing_key =
            hmac_sha256(format!("AWS4{}", secret_key).as_bytes(), date_stamp.as_bytes())?;
        let scope_pieces: [&[u8]; 3] = [self.config.region.as_bytes(), b"s3", b"aws4_request"];
        for piece in scope_pieces {
            signing_key = hmac_sha256(&signing_key, piece)?;
        }
        let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?);

        let authorization = format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders=host;x-amz-content-sha256;x-amz-date, Signature={}",
            access_key, credential_scope, signature
        );

        let response = self
            .http_client
            .put(&url)
            .header("Host", &host)
            .header("x-amz-date", &amz_date)
            .header("x-amz-content-sha256", &payload_hash)
            .header("Authorization", &authorization)
            .header("Content-Type", "application/json")
            .body(policy.to_string())
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send policy request: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(AppError::Internal(format!(
                "PutBucketPolicy failed: {} - {}",
                status, body
            )))
        }
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| AppError::Internal(format!("HMAC key error: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<String> {
        self.bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload object '{}': {}", key, e)))?;

        debug!("Uploaded object '{}' to bucket '{}'", key, self.bucket.name());
        Ok(self.public_url(key))
    }

    fn public_url(&self, key: &str) -> String {
        match &self.config.public_endpoint {
            // Path-style URL for S3-compatible servers
            Some(endpoint) => format!("{}/{}/{}", endpoint, self.bucket.name(), key),
            // Canonical AWS form
            None => format!("https://{}.s3.amazonaws.com/{}", self.bucket.name(), key),
        }
    }
}
