//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor};

/// Creates the rate limiter for the upload endpoint.
///
/// # Limits
///
/// - **Rate**: 1 request every 2 seconds
/// - **Burst**: 10 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Pass [`tower_governor::key_extractor::PeerIpKeyExtractor`] to key on the
/// socket peer address, or [`tower_governor::key_extractor::SmartIpKeyExtractor`]
/// to honour `X-Forwarded-For` / `X-Real-IP` behind a trusted proxy.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/upload", post(upload_handler))
///     .layer(rate_limit::upload_layer(PeerIpKeyExtractor));
/// ```
pub fn upload_layer<K>(
    key_extractor: K,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(2)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
