//! Gemini SSE stream parser.
//!
//! `streamGenerateContent?alt=sse` sends one `data:` line per event and every
//! payload is a complete `GenerateContentResponse`, not a delta.

use super::types::GenerateContentResponse;
use crate::error::ModelError;
use bytes::Bytes;
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// Longest SSE line accepted before the stream is failed.
pub const MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

pin_project! {
    /// Turns a byte stream of SSE events into response chunks.
    pub struct GoogleStreamParser<S> {
        #[pin]
        inner: S,
        buffer: Vec<u8>,
        done: bool,
        timeout: Option<Duration>,
    }
}

impl<S> GoogleStreamParser<S>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>>,
{
    /// Create a new stream parser.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            done: false,
            timeout: None,
        }
    }

    /// Report transport timeouts as having happened after `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Outcome of decoding a single SSE line.
enum Line {
    Skip,
    Done,
    Chunk(GenerateContentResponse),
}

fn decode_line(raw: &[u8]) -> Line {
    let line = String::from_utf8_lossy(raw);
    let line = line.trim();

    // Blank separators, comments and non-data fields carry nothing for us.
    let Some(payload) = line.strip_prefix("data:") else {
        return if line.starts_with('{') {
            parse_payload(line)
        } else {
            Line::Skip
        };
    };

    let payload = payload.trim_start();
    if payload == "[DONE]" {
        return Line::Done;
    }
    parse_payload(payload)
}

fn parse_payload(payload: &str) -> Line {
    if payload.is_empty() {
        return Line::Skip;
    }
    match serde_json::from_str::<GenerateContentResponse>(payload) {
        Ok(response) => Line::Chunk(response),
        Err(e) => {
            tracing::warn!("Failed to parse Gemini stream chunk: {} - {}", e, payload);
            Line::Skip
        }
    }
}

impl<S> Stream for GoogleStreamParser<S>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>>,
{
    type Item = Result<GenerateContentResponse, ModelError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            while let Some(line_end) = this.buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = this.buffer.drain(..=line_end).collect();
                match decode_line(&line) {
                    Line::Skip => continue,
                    Line::Done => {
                        *this.done = true;
                        return Poll::Ready(None);
                    }
                    Line::Chunk(response) => return Poll::Ready(Some(Ok(response))),
                }
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => {
                    this.buffer.extend_from_slice(&bytes);
                    let pending_line = this
                        .buffer
                        .iter()
                        .position(|b| *b == b'\n')
                        .unwrap_or(this.buffer.len());
                    if pending_line > MAX_LINE_BYTES {
                        *this.done = true;
                        this.buffer.clear();
                        return Poll::Ready(Some(Err(ModelError::invalid_response(format!(
                            "stream line exceeds {MAX_LINE_BYTES} bytes"
                        )))));
                    }
                }
                Poll::Ready(Some(Err(e))) => {
                    *this.done = true;
                    return Poll::Ready(Some(Err(ModelError::from_transport(e, *this.timeout))));
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    // Final event may arrive without a trailing newline.
                    let remaining = std::mem::take(this.buffer);
                    if let Line::Chunk(response) = decode_line(&remaining) {
                        return Poll::Ready(Some(Ok(response)));
                    }
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
