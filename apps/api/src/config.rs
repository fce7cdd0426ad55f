use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or out of range.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub daily_quota: u32,
    pub canvas_size: u32,
    pub gcp_project_id: String,
    pub gcp_region: String,
    pub gcp_access_token: String,
    pub imagen_model: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    /// Base of the URLs returned for uploaded images.
    pub public_base_url: String,
    pub star_sprites_dir: Option<PathBuf>,
    pub fonts_dir: Option<PathBuf>,
    /// `["*"]` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            daily_quota: env_or("DAILY_QUOTA", "100")
                .parse::<u32>()
                .context("DAILY_QUOTA must be a positive integer")?,
            canvas_size: env_or("CANVAS_SIZE", "1024")
                .parse::<u32>()
                .context("CANVAS_SIZE must be a positive integer")?,
            gcp_project_id: require_env("GCP_PROJECT_ID")?,
            gcp_region: env_or("GCP_REGION", "europe-west1"),
            gcp_access_token: require_env("GCP_ACCESS_TOKEN")?,
            imagen_model: env_or("IMAGEN_MODEL", "imagen-3.0-generate-001"),
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            public_base_url: require_env("PUBLIC_BASE_URL")?,
            star_sprites_dir: optional_env("STAR_SPRITES_DIR").map(PathBuf::from),
            fonts_dir: optional_env("FONTS_DIR").map(PathBuf::from),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "*")),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            (1..=10_000).contains(&self.daily_quota),
            "DAILY_QUOTA must be between 1 and 10000 (got {})",
            self.daily_quota
        );
        ensure!(
            (512..=2048).contains(&self.canvas_size),
            "CANVAS_SIZE must be between 512 and 2048 (got {})",
            self.canvas_size
        );
        Ok(())
    }

    pub fn cors_layer(&self) -> Result<CorsLayer> {
        if self.cors_origins.iter().any(|o| o == "*") {
            return Ok(CorsLayer::permissive());
        }
        let origins = self
            .cors_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{o}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any))
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
