//! Unit tests for the detection crate

#[cfg(test)]
mod gateway_tests {
    use crate::application::config::GatewayConfig;
    use crate::application::gateway::PredictionGateway;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unreachable_service_degrades_to_fallback() {
        // Nothing listens here; the connection is refused immediately
        let config = GatewayConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
        };
        let gateway = PredictionGateway::new(Arc::new(config));

        let result = gateway.predict(b"not even an image").await;

        assert!(!result.predictions.is_empty());
        assert!(result.predictions.windows(2).all(|w| w[0].rank < w[1].rank));
        assert_eq!(result.predictions[0].breed, "Gir (Cattle)");
        assert!(result.predictions.iter().all(|p| (0..=100).contains(&p.confidence)));
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::application::gateway::fallback_prediction;
    use crate::presentation::dto::{DetectResponse, SubmitFeedbackRequest};

    #[test]
    fn test_detect_response_wire_shape() {
        let response = DetectResponse::new(
            "data:image/jpeg;base64,abc".to_string(),
            fallback_prediction(),
        );

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"imageUri\":\"data:image/jpeg;base64,abc\""));
        assert!(json.contains("\"predictions\""));
        assert!(json.contains("\"heatmapData\""));
        assert!(json.contains("\"processingTime\":1.5"));
        assert!(json.contains("\"rank\":1"));
    }

    #[test]
    fn test_feedback_request_tolerates_missing_fields() {
        // Presence validation happens in the use case
        let req: SubmitFeedbackRequest = serde_json::from_str("{}").unwrap();
        assert!(req.image_uri.is_none());
        assert!(req.predicted_breeds.is_empty());
        assert!(req.breed_ratings.is_empty());
    }
}
