//! Caption and poster-text endpoints.
//!
//! Both draw from the static tables in the `captions` crate. Unknown template
//! names, tones and categories fall back to their defaults, so the only
//! failures are malformed bodies and rate-limit rejections.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use captions::{
    CaptionRequest, CaptionResponse, PosterCategory, PosterTextRequest, PosterTextResponse, Tone,
};

use super::ApiError;
use crate::state::AppState;

/// `POST /api/generate-caption`: pick a caption for a template and tone.
pub async fn generate_caption(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    payload: Result<Json<CaptionRequest>, JsonRejection>,
) -> Result<Json<CaptionResponse>, ApiError> {
    let Json(request) = payload?;

    if let Err(e) = state.rate_limiter.check_and_record(peer.ip()) {
        tracing::warn!(client = %peer.ip(), error = %e, "caption: rate limited");
        return Err(e.into());
    }

    let tone = Tone::parse_or_default(&request.tone);
    let caption = state.with_rng_mut(|rng| captions::caption_for(&request.template, tone, rng));
    tracing::info!(
        template = %request.template,
        tone = tone.as_str(),
        known_template = captions::is_known_template(&request.template),
        "caption: generated"
    );

    Ok(Json(CaptionResponse { caption: caption.to_owned() }))
}

/// `POST /api/generate-poster-full`: pick heading, subheading and body together.
pub async fn generate_poster(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    payload: Result<Json<PosterTextRequest>, JsonRejection>,
) -> Result<Json<PosterTextResponse>, ApiError> {
    let Json(request) = payload?;

    if let Err(e) = state.rate_limiter.check_and_record(peer.ip()) {
        tracing::warn!(client = %peer.ip(), error = %e, "poster: rate limited");
        return Err(e.into());
    }

    let category = PosterCategory::parse_or_default(&request.category);
    let text = state.with_rng_mut(|rng| captions::poster_for(category, rng));
    tracing::info!(category = category.as_str(), "poster: generated");

    Ok(Json(PosterTextResponse { text }))
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
