//! Nebula background generation.
//!
//! The orchestrator only sees `BackgroundGenerator`; `ImagenClient` is the
//! production implementation over the Vertex AI Imagen `:predict` endpoint.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::RgbaImage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Edge length of every image the model returns for a 1:1 request.
pub const GENERATED_SIZE: u32 = 1024;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum ImageGenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("response contained no image")]
    NoPrediction,

    #[error("could not decode generated image: {0}")]
    Decode(String),

    #[error("generated image is {width}x{height}, expected 1024x1024")]
    WrongSize { width: u32, height: u32 },

    #[error("generated image is completely black")]
    Blank,
}

#[async_trait]
pub trait BackgroundGenerator: Send + Sync {
    /// Produces a validated `GENERATED_SIZE`² nebula for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<RgbaImage, ImageGenError>;
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [PredictInstance<'a>; 1],
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: &'static str,
    safety_setting: &'static str,
    person_generation: &'static str,
}

impl Default for PredictParameters {
    fn default() -> Self {
        Self {
            sample_count: 1,
            aspect_ratio: "1:1",
            safety_setting: "block_some",
            person_generation: "allow_adult",
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// Vertex AI Imagen client. Retries on 429 and 5xx with exponential backoff.
#[derive(Clone)]
pub struct ImagenClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl ImagenClient {
    pub fn new(
        project_id: &str,
        region: &str,
        model: &str,
        access_token: String,
    ) -> Result<Self, ImageGenError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            endpoint: predict_endpoint(project_id, region, model),
            access_token,
        })
    }

    async fn predict(&self, prompt: &str) -> Result<PredictResponse, ImageGenError> {
        let request_body = PredictRequest {
            instances: [PredictInstance { prompt }],
            parameters: PredictParameters::default(),
        };

        let mut last_error: Option<ImageGenError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Imagen call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.access_token)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ImageGenError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Imagen API returned {}: {}", status, body);
                last_error = Some(ImageGenError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GoogleError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(ImageGenError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(response.json().await?);
        }

        Err(last_error.unwrap_or(ImageGenError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl BackgroundGenerator for ImagenClient {
    async fn generate(&self, prompt: &str) -> Result<RgbaImage, ImageGenError> {
        info!("Requesting nebula background ({} chars of prompt)", prompt.len());
        debug!("Prompt: {prompt}");

        let response = self.predict(prompt).await?;
        let encoded = response
            .predictions
            .into_iter()
            .find_map(|p| p.bytes_base64_encoded)
            .ok_or(ImageGenError::NoPrediction)?;

        let image = decode_prediction(&encoded)?;
        validate_background(&image)?;
        info!("Background generated: {}x{}", image.width(), image.height());
        Ok(image)
    }
}

fn predict_endpoint(project_id: &str, region: &str, model: &str) -> String {
    format!(
        "https://{region}-aiplatform.googleapis.com/v1/projects/{project_id}/locations/{region}/publishers/google/models/{model}:predict"
    )
}

fn decode_prediction(encoded: &str) -> Result<RgbaImage, ImageGenError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ImageGenError::Decode(e.to_string()))?;
    let image = image::load_from_memory(&bytes).map_err(|e| ImageGenError::Decode(e.to_string()))?;
    Ok(image.to_rgba8())
}

/// Rejects images of the wrong size and images with no lit pixel at all.
pub fn validate_background(image: &RgbaImage) -> Result<(), ImageGenError> {
    let (width, height) = image.dimensions();
    if width != GENERATED_SIZE || height != GENERATED_SIZE {
        return Err(ImageGenError::WrongSize { width, height });
    }
    if image.pixels().all(|p| p.0[..3] == [0, 0, 0]) {
        return Err(ImageGenError::Blank);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_base64(image: &RgbaImage) -> String {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        STANDARD.encode(buf.into_inner())
    }

    #[test]
    fn test_request_body_shape() {
        let body = PredictRequest {
            instances: [PredictInstance { prompt: "nebula" }],
            parameters: PredictParameters::default(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["instances"][0]["prompt"], "nebula");
        assert_eq!(json["parameters"]["sampleCount"], 1);
        assert_eq!(json["parameters"]["aspectRatio"], "1:1");
        assert_eq!(json["parameters"]["safetySetting"], "block_some");
        assert_eq!(json["parameters"]["personGeneration"], "allow_adult");
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"predictions":[{"bytesBase64Encoded":"AAAA","mimeType":"image/png"}]}"#;
        let parsed: PredictResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.predictions[0].bytes_base64_encoded.as_deref(),
            Some("AAAA")
        );

        let empty: PredictResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.predictions.is_empty());
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            predict_endpoint("proj", "europe-west1", "imagen-3.0-generate-001"),
            "https://europe-west1-aiplatform.googleapis.com/v1/projects/proj/locations/europe-west1/publishers/google/models/imagen-3.0-generate-001:predict"
        );
    }

    #[test]
    fn test_decode_prediction_roundtrips_png() {
        let img = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));
        let decoded = decode_prediction(&png_base64(&img)).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_prediction("%%%not-base64"),
            Err(ImageGenError::Decode(_))
        ));
        assert!(matches!(
            decode_prediction(&STANDARD.encode(b"not an image")),
            Err(ImageGenError::Decode(_))
        ));
    }

    #[test]
    fn test_validation() {
        let small = RgbaImage::from_pixel(512, 512, Rgba([40, 0, 80, 255]));
        assert!(matches!(
            validate_background(&small),
            Err(ImageGenError::WrongSize { width: 512, .. })
        ));

        let mut black = RgbaImage::from_pixel(GENERATED_SIZE, GENERATED_SIZE, Rgba([0, 0, 0, 255]));
        assert!(matches!(validate_background(&black), Err(ImageGenError::Blank)));

        black.put_pixel(500, 500, Rgba([0, 0, 1, 255]));
        assert!(validate_background(&black).is_ok());
    }
}
