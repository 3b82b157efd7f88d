//! The decode → plan → encode pipeline.
//!
//! Steps run strictly in sequence and each one gates the next. The pipeline
//! does no I/O and keeps no state between runs; callers that need a
//! non-blocking boundary (a Web Worker, a thread pool) wrap the whole call.

use thiserror::Error;
use tracing::debug;

use crate::config::{CompressionMode, EncodeRequest, PipelineConfig};
use crate::decode::{decode_image, DecodeError, SourceImage};
use crate::encode::{search_to_target, EncodeError, QualityEncoder, RasterEncoder};
use crate::payload::EncodedResult;

/// Errors that end a pipeline run. Neither kind is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source bytes are not a usable image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The output could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Decode, resize and re-encode `source_bytes` per `config`.
///
/// Uses a [`RasterEncoder`] with the configured resampling filter.
///
/// # Errors
///
/// * `PipelineError::Decode` if the source cannot be decoded
/// * `PipelineError::Encode` if the output format is unsupported or the
///   codec fails
///
/// A size budget that cannot be met is not an error; the best attempt is
/// returned.
pub fn run(
    source_bytes: &[u8],
    mime_type: &str,
    config: &PipelineConfig,
) -> Result<EncodedResult, PipelineError> {
    run_with_encoder(
        &RasterEncoder::new(config.filter),
        source_bytes,
        mime_type,
        config,
    )
}

/// Like [`run`], with a caller-supplied encoder.
pub fn run_with_encoder<E: QualityEncoder + ?Sized>(
    encoder: &E,
    source_bytes: &[u8],
    mime_type: &str,
    config: &PipelineConfig,
) -> Result<EncodedResult, PipelineError> {
    let (image, source_format) = decode_image(source_bytes, mime_type)?;
    let request = EncodeRequest::resolve(config, image.dimensions(), source_format)?;
    debug!(
        source_width = image.width,
        source_height = image.height,
        target_width = request.target_width,
        target_height = request.target_height,
        format = %request.format,
        "planned output"
    );

    Ok(encode_request(encoder, &image, &request)?)
}

/// Run the encode stage for an already-decoded source.
pub fn encode_request<E: QualityEncoder + ?Sized>(
    encoder: &E,
    image: &SourceImage,
    request: &EncodeRequest,
) -> Result<EncodedResult, EncodeError> {
    let bytes = match request.mode {
        CompressionMode::Quality(quality) => encoder.encode(
            image,
            request.target_width,
            request.target_height,
            request.format,
            quality,
        )?,
        CompressionMode::TargetSize(target_kb) => {
            search_to_target(
                encoder,
                image,
                request.target_width,
                request.target_height,
                request.format,
                target_kb,
            )?
            .bytes
        }
    };

    Ok(EncodedResult::new(bytes, request.format))
}
