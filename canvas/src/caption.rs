//! Caption requests: ticket bookkeeping and (with the `net` feature) the
//! HTTP calls to the generation endpoints.
//!
//! A ticket is taken when the user presses "generate" and handed back with
//! the result. Only one request per editor is in flight at a time; the rest
//! of the editor stays live while it is pending.

#[cfg(test)]
#[path = "caption_test.rs"]
mod caption_test;

use captions::{CaptionRequest, PosterTextRequest};

use crate::doc::ElementId;

/// Why a caption request produced no text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptionError {
    #[error("caption request failed: {0}")]
    Transport(String),
    #[error("caption service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("caption response could not be decoded: {0}")]
    Decode(String),
}

/// An in-flight meme caption request.
///
/// `target` is the element that was selected when the request started; the
/// result only lands there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTicket {
    pub seq: u64,
    pub target: ElementId,
    pub request: CaptionRequest,
}

/// An in-flight poster text request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterTicket {
    pub seq: u64,
    pub request: PosterTextRequest,
}

/// Single-slot in-flight tracker.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    next_seq: u64,
    in_flight: Option<u64>,
}

impl RequestGate {
    /// Claim the slot, returning the new sequence number, or `None` if a
    /// request is already pending.
    pub fn try_begin(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        Some(self.next_seq)
    }

    /// Release the slot held by `seq`. Returns false if `seq` is not the
    /// pending request; the slot is then left alone.
    pub fn finish(&mut self, seq: u64) -> bool {
        if self.in_flight == Some(seq) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

// =============================================================
// HTTP
// =============================================================

#[cfg(feature = "net")]
pub use net::{fetch_caption, fetch_poster_text};

#[cfg(feature = "net")]
mod net {
    use captions::{
        CAPTION_PATH, CaptionRequest, CaptionResponse, ErrorResponse, POSTER_PATH, PosterText, PosterTextRequest,
        PosterTextResponse,
    };
    use gloo_net::http::{Request, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::CaptionError;

    /// `POST {base}/api/generate-caption`.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies all map to
    /// a [`CaptionError`]; the caller keeps its current text.
    pub async fn fetch_caption(base: &str, request: &CaptionRequest) -> Result<String, CaptionError> {
        let body: CaptionResponse = post_json(&format!("{base}{CAPTION_PATH}"), request).await?;
        Ok(body.caption)
    }

    /// `POST {base}/api/generate-poster-full`.
    ///
    /// # Errors
    ///
    /// Same mapping as [`fetch_caption`].
    pub async fn fetch_poster_text(base: &str, request: &PosterTextRequest) -> Result<PosterText, CaptionError> {
        let body: PosterTextResponse = post_json(&format!("{base}{POSTER_PATH}"), request).await?;
        Ok(body.text)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, CaptionError> {
        let resp = Request::post(url)
            .json(body)
            .map_err(|e| CaptionError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| CaptionError::Transport(e.to_string()))?;

        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(CaptionError::Status { status, message: error_message(resp).await });
        }
        resp.json::<T>()
            .await
            .map_err(|e| CaptionError::Decode(e.to_string()))
    }

    async fn error_message(resp: Response) -> String {
        match resp.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => resp.status_text(),
        }
    }
}
