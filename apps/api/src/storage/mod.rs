//! Object storage for finished constellation images.

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;

const KEY_PREFIX: &str = "constellations";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("upload of '{key}' failed: {message}")]
    Upload { key: String, message: String },
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores a PNG and returns its public URL.
    async fn upload_png(&self, png: Bytes) -> Result<String, StorageError>;
}

pub struct S3ImageStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3ImageStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_base_url: &str) -> Self {
        Self {
            client,
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn upload_png(&self, png: Bytes) -> Result<String, StorageError> {
        let key = object_key(Uuid::new_v4());
        let size = png.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(png))
            .content_type("image/png")
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.clone(),
                message: e.to_string(),
            })?;

        info!("Uploaded {size} bytes to s3://{}/{}", self.bucket, key);
        Ok(public_url(&self.public_base_url, &key))
    }
}

/// Constructs an S3 client configured for MinIO (local) or any S3-compatible endpoint.
pub async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "constellation-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    // MinIO serves buckets by path, not by virtual host.
    let s3_config = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}

fn object_key(id: Uuid) -> String {
    format!("{KEY_PREFIX}/{id}.png")
}

fn public_url(base: &str, key: &str) -> String {
    format!("{base}/{key}")
}
