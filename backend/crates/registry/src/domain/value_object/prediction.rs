//! Prediction Value Objects
//!
//! Wire shapes shared between the prediction gateway and the feedback
//! records that store its output.

use serde::{Deserialize, Serialize};

/// One ranked breed prediction. Confidence is an integer percent
/// (0-100), not the 0-10 breed-rating scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedPrediction {
    pub breed: String,
    pub confidence: i32,
    pub rank: i32,
}

/// Attention heatmaps for the top two predicted breeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapData {
    pub breed1: String,
    pub breed2: String,
    pub heatmap1_uri: String,
    pub heatmap2_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_shape() {
        let heatmap = HeatmapData {
            breed1: "Gir (Cattle)".to_string(),
            breed2: "Sahiwal (Cattle)".to_string(),
            heatmap1_uri: "data:image/png;base64,a".to_string(),
            heatmap2_uri: "data:image/png;base64,b".to_string(),
        };

        let json = serde_json::to_string(&heatmap).unwrap();
        assert!(json.contains("heatmap1Uri"));
        assert!(json.contains("heatmap2Uri"));
    }
}
