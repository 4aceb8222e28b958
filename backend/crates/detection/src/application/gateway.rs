//! Prediction Gateway
//!
//! Forwards an image to the external model endpoint and normalizes the
//! response: top 3 predictions, integer-percent confidence, 1-based
//! rank, heatmaps for the top two breeds. Any upstream failure degrades
//! to a deterministic fallback set so `predict` itself cannot fail.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use registry::domain::value_object::{BreedPrediction, HeatmapData};
use serde::{Deserialize, Serialize};

use crate::application::config::GatewayConfig;
use crate::error::{DetectionError, DetectionResult};

/// How many ranked predictions the API exposes
pub const MAX_PREDICTIONS: usize = 3;

/// Normalized prediction outcome
#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub predictions: Vec<BreedPrediction>,
    pub heatmap_data: HeatmapData,
    /// Upstream processing time in seconds, 0 when the service does not
    /// report one
    pub processing_time: f64,
}

#[derive(Serialize)]
struct ModelRequest {
    image: String,
    return_heatmaps: bool,
}

#[derive(Deserialize)]
struct ModelResponse {
    predictions: Vec<RawPrediction>,
    #[serde(default)]
    processing_time: f64,
}

#[derive(Deserialize)]
struct RawPrediction {
    breed: String,
    /// Fractional confidence, 0.0-1.0
    confidence: f64,
}

/// Gateway to the external prediction service
pub struct PredictionGateway {
    http: reqwest::Client,
    config: Arc<GatewayConfig>,
}

impl PredictionGateway {
    pub fn new(config: Arc<GatewayConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Predict the breed for an uploaded image. Never fails: upstream
    /// trouble of any kind produces the canned fallback set instead.
    pub async fn predict(&self, image: &[u8]) -> PredictionResult {
        // Undecodable bytes go upstream as-is; the fallback covers a
        // rejection there too
        let payload = match platform::imageops::preprocess_for_model(image) {
            Ok(jpeg) => jpeg,
            Err(e) => {
                tracing::debug!(error = %e, "Image preprocessing failed, forwarding original bytes");
                image.to_vec()
            }
        };

        match self.call_model(&payload).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Prediction service unavailable, returning fallback prediction"
                );
                fallback_prediction()
            }
        }
    }

    async fn call_model(&self, jpeg: &[u8]) -> DetectionResult<PredictionResult> {
        let request = ModelRequest {
            image: STANDARD.encode(jpeg),
            return_heatmaps: true,
        };

        let response = self
            .http
            .post(self.config.predict_url())
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let parsed: ModelResponse = response.json().await?;

        if parsed.predictions.is_empty() {
            return Err(DetectionError::EmptyPrediction);
        }

        Ok(normalize(parsed.predictions, parsed.processing_time))
    }
}

/// Truncate to the top ranked entries and convert fractional confidence
/// to integer percent
fn normalize(raw: Vec<RawPrediction>, processing_time: f64) -> PredictionResult {
    let predictions: Vec<BreedPrediction> = raw
        .into_iter()
        .take(MAX_PREDICTIONS)
        .enumerate()
        .map(|(index, p)| BreedPrediction {
            breed: p.breed,
            confidence: ((p.confidence * 100.0).round() as i32).clamp(0, 100),
            rank: index as i32 + 1,
        })
        .collect();

    let heatmap_data = heatmaps_for(&predictions);

    PredictionResult {
        predictions,
        heatmap_data,
        processing_time,
    }
}

/// Heatmap references for the top two predicted breeds. The model's raw
/// heatmap tensors are not exposed; placeholder data URIs stand in for
/// rendered overlays.
fn heatmaps_for(predictions: &[BreedPrediction]) -> HeatmapData {
    let breed = |index: usize| {
        predictions
            .get(index)
            .map(|p| p.breed.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    };

    HeatmapData {
        breed1: breed(0),
        breed2: breed(1),
        heatmap1_uri: placeholder_heatmap(1),
        heatmap2_uri: placeholder_heatmap(2),
    }
}

fn placeholder_heatmap(index: u8) -> String {
    format!(
        "data:image/png;base64,{}",
        STANDARD.encode(format!("heatmap_{}", index))
    )
}

/// Deterministic prediction set served when the model cannot be reached
///
/// Mirrors the mobile client's own offline mock so the flow looks the
/// same whichever side degraded.
pub fn fallback_prediction() -> PredictionResult {
    let breeds = [
        ("Gir (Cattle)", 92),
        ("Sahiwal (Cattle)", 5),
        ("Red Sindhi (Cattle)", 3),
    ];

    let predictions: Vec<BreedPrediction> = breeds
        .iter()
        .enumerate()
        .map(|(index, (breed, confidence))| BreedPrediction {
            breed: (*breed).to_string(),
            confidence: *confidence,
            rank: index as i32 + 1,
        })
        .collect();

    let heatmap_data = heatmaps_for(&predictions);

    PredictionResult {
        predictions,
        heatmap_data,
        processing_time: 1.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, f64)]) -> Vec<RawPrediction> {
        pairs
            .iter()
            .map(|(breed, confidence)| RawPrediction {
                breed: (*breed).to_string(),
                confidence: *confidence,
            })
            .collect()
    }

    #[test]
    fn test_normalize_truncates_to_top_three_and_rounds_percent() {
        let result = normalize(
            raw(&[
                ("Gir (Cattle)", 0.914),
                ("Sahiwal (Cattle)", 0.05),
                ("Red Sindhi (Cattle)", 0.028),
                ("Tharparkar (Cattle)", 0.008),
            ]),
            2.25,
        );

        assert_eq!(result.predictions.len(), MAX_PREDICTIONS);
        assert_eq!(result.predictions[0].confidence, 91);
        assert_eq!(result.predictions[1].confidence, 5);
        assert_eq!(result.predictions[2].confidence, 3);
        assert_eq!(result.processing_time, 2.25);

        for (index, prediction) in result.predictions.iter().enumerate() {
            assert_eq!(prediction.rank, index as i32 + 1);
        }
    }

    #[test]
    fn test_normalize_clamps_out_of_range_confidence() {
        let result = normalize(raw(&[("Gir (Cattle)", 1.4), ("Sahiwal (Cattle)", -0.2)]), 0.0);

        assert_eq!(result.predictions[0].confidence, 100);
        assert_eq!(result.predictions[1].confidence, 0);
    }

    #[test]
    fn test_heatmaps_use_top_two_breeds() {
        let result = normalize(
            raw(&[("Gir (Cattle)", 0.9), ("Sahiwal (Cattle)", 0.1)]),
            0.0,
        );

        assert_eq!(result.heatmap_data.breed1, "Gir (Cattle)");
        assert_eq!(result.heatmap_data.breed2, "Sahiwal (Cattle)");
        assert!(result.heatmap_data.heatmap1_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_heatmaps_fall_back_to_unknown_with_one_prediction() {
        let result = normalize(raw(&[("Gir (Cattle)", 0.9)]), 0.0);

        assert_eq!(result.heatmap_data.breed1, "Gir (Cattle)");
        assert_eq!(result.heatmap_data.breed2, "Unknown");
    }

    #[test]
    fn test_fallback_is_rank_ordered_and_non_empty() {
        let result = fallback_prediction();

        assert_eq!(result.predictions.len(), 3);
        assert_eq!(result.predictions[0].breed, "Gir (Cattle)");
        assert_eq!(result.predictions[0].confidence, 92);
        assert!(result.predictions.windows(2).all(|w| w[0].rank < w[1].rank));
        assert_eq!(result.processing_time, 1.5);
    }
}
