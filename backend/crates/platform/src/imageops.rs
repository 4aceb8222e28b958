//! Image preprocessing for the prediction gateway
//!
//! The external model expects small, consistently sized inputs, so
//! uploads are resized and recompressed before they go over the wire.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use thiserror::Error;

/// Model input edge length in pixels.
pub const MODEL_INPUT_SIZE: u32 = 224;

/// JPEG quality used when recompressing.
pub const JPEG_QUALITY: u8 = 90;

/// Preprocessing errors
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Input bytes could not be decoded as an image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Re-encoding failed
    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// Resize an uploaded image to the model input size and recompress as JPEG.
///
/// Returns the JPEG bytes ready to be base64-encoded into the model
/// request. Callers decide what to do when decoding fails (the gateway
/// forwards the original bytes rather than failing the request).
pub fn preprocess_for_model(bytes: &[u8]) -> Result<Vec<u8>, PreprocessError> {
    let img = image::load_from_memory(bytes).map_err(|e| PreprocessError::Decode(e.to_string()))?;

    let resized = img.resize_exact(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, FilterType::Triangle);

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), JPEG_QUALITY);
    resized
        .write_with_encoder(encoder)
        .map_err(|e| PreprocessError::Encode(e.to_string()))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 90, 60]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_preprocess_resizes_to_model_input() {
        let png = sample_png(640, 480);
        let jpeg = preprocess_for_model(&png).unwrap();

        let out = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(out.width(), MODEL_INPUT_SIZE);
        assert_eq!(out.height(), MODEL_INPUT_SIZE);
    }

    #[test]
    fn test_preprocess_rejects_garbage() {
        let result = preprocess_for_model(b"definitely not an image");
        assert!(matches!(result, Err(PreprocessError::Decode(_))));
    }
}
