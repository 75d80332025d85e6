// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Response encoding: JSON body, negotiated compression, and ETags.
//!
//! The corpus never changes after load, so a response is fully determined by
//! the corpus checksum, the request, and the coding negotiated from
//! `Accept-Encoding`. The ETag is built from exactly those three, so handlers
//! can answer `If-None-Match` with [`not_modified`] before searching.
//!
//! | Accept-Encoding        | Compression::Auto | Compression::Off |
//! |------------------------|-------------------|------------------|
//! | `br, gzip`             | br                | identity         |
//! | `gzip`                 | gzip              | identity         |
//! | `gzip;q=0, br;q=0`     | identity          | identity         |
//! | `br;q=0, *`            | gzip              | identity         |
//! | absent                 | identity          | identity         |
//!
//! A body under [`MIN_COMPRESS_BYTES`] is sent as identity but keeps the tag
//! of the negotiated coding; the bytes are still a function of the tag.

use super::types::Compression;
use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::io::Write;
use tracing::error;

/// Brotli quality for responses; 11 is too slow for per-request work.
const BROTLI_QUALITY: u32 = 5;
const BROTLI_LGWIN: u32 = 22;
const BROTLI_BUFFER: usize = 4096;

/// Bodies smaller than this are sent uncompressed.
pub const MIN_COMPRESS_BYTES: usize = 256;

/// Content coding chosen for one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Identity,
    Gzip,
    Brotli,
}

impl ContentEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Identity => "identity",
            ContentEncoding::Gzip => "gzip",
            ContentEncoding::Brotli => "br",
        }
    }
}

/// Pick a coding from an `Accept-Encoding` value. Brotli wins a tie.
///
/// An explicit `q=0` for a coding refuses it even when `*` is also listed.
pub fn negotiate(accept_encoding: Option<&str>, policy: Compression) -> ContentEncoding {
    let Some(accept) = accept_encoding else {
        return ContentEncoding::Identity;
    };
    if policy == Compression::Off {
        return ContentEncoding::Identity;
    }

    let mut gzip = false;
    let mut brotli = false;
    let mut wildcard = false;
    let mut gzip_refused = false;
    let mut brotli_refused = false;
    for item in accept.split(',') {
        let mut parts = item.split(';');
        let coding = parts.next().unwrap_or("").trim().to_ascii_lowercase();
        let refused = parts.any(|param| {
            let param = param.trim();
            param
                .strip_prefix("q=")
                .and_then(|q| q.trim().parse::<f32>().ok())
                .is_some_and(|q| q <= 0.0)
        });
        match (coding.as_str(), refused) {
            ("br", true) => brotli_refused = true,
            ("br", false) => brotli = true,
            ("gzip" | "x-gzip", true) => gzip_refused = true,
            ("gzip" | "x-gzip", false) => gzip = true,
            ("*", false) => wildcard = true,
            _ => {}
        }
    }

    let brotli = !brotli_refused && (brotli || wildcard);
    let gzip = !gzip_refused && (gzip || wildcard);
    if brotli {
        ContentEncoding::Brotli
    } else if gzip {
        ContentEncoding::Gzip
    } else {
        ContentEncoding::Identity
    }
}

/// Compress `body` with the chosen coding.
pub fn compress(body: &[u8], encoding: ContentEncoding) -> std::io::Result<Vec<u8>> {
    match encoding {
        ContentEncoding::Identity => Ok(body.to_vec()),
        ContentEncoding::Gzip => {
            use flate2::write::GzEncoder;
            let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(body)?;
            encoder.finish()
        }
        ContentEncoding::Brotli => {
            let mut compressed = Vec::new();
            {
                let mut encoder = brotli::CompressorWriter::new(
                    &mut compressed,
                    BROTLI_BUFFER,
                    BROTLI_QUALITY,
                    BROTLI_LGWIN,
                );
                encoder.write_all(body)?;
                encoder.flush()?;
            }
            Ok(compressed)
        }
    }
}

/// Strong ETag for a response: corpus checksum, request key, coding.
pub fn etag(corpus_checksum: u32, request_key: &str, encoding: ContentEncoding) -> String {
    format!(
        "\"{:08x}-{:08x}-{}\"",
        corpus_checksum,
        crc32fast::hash(request_key.as_bytes()),
        encoding.as_str()
    )
}

fn if_none_match_tags(headers: &HeaderMap) -> impl Iterator<Item = &str> {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
}

fn same_tag(candidate: &str, tag: &str) -> bool {
    candidate == tag || candidate.strip_prefix("W/") == Some(tag)
}

/// Does `If-None-Match` already name this ETag?
pub fn matches_if_none_match(headers: &HeaderMap, tag: &str) -> bool {
    if_none_match_tags(headers).any(|candidate| candidate == "*" || same_tag(candidate, tag))
}

fn accepted_coding(request_headers: &HeaderMap, policy: Compression) -> ContentEncoding {
    let accept = request_headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|value| value.to_str().ok());
    negotiate(accept, policy)
}

/// Cache key for a response, if it is cacheable.
#[derive(Debug, Clone, Copy)]
pub struct Revalidation<'a> {
    pub corpus_checksum: u32,
    pub request_key: &'a str,
}

impl Revalidation<'_> {
    /// ETag of the response this request would get. Needs no response body.
    pub fn tag(&self, request_headers: &HeaderMap, policy: Compression) -> String {
        etag(
            self.corpus_checksum,
            self.request_key,
            accepted_coding(request_headers, policy),
        )
    }
}

/// `304 Not Modified` when `If-None-Match` names this request's tag exactly.
///
/// Runs before the response is computed, so `*` is not honoured here: an
/// error response has no representation to match.
pub fn not_modified(
    request_headers: &HeaderMap,
    policy: Compression,
    revalidation: Revalidation<'_>,
) -> Option<Response> {
    let tag = revalidation.tag(request_headers, policy);
    if_none_match_tags(request_headers)
        .any(|candidate| same_tag(candidate, &tag))
        .then(|| with_etag(StatusCode::NOT_MODIFIED.into_response(), &tag))
}

/// Serialize `value` to JSON and encode it for the client.
///
/// Error responses pass `revalidation: None` and are never compressed.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    value: &T,
    request_headers: &HeaderMap,
    policy: Compression,
    revalidation: Option<Revalidation<'_>>,
) -> Response {
    let body = match serde_json::to_vec(value) {
        Ok(body) => body,
        Err(err) => {
            error!(error = %err, "failed to serialize response");
            return (StatusCode::INTERNAL_SERVER_ERROR, "encoding failure").into_response();
        }
    };

    let encoding = if status.is_success() && body.len() >= MIN_COMPRESS_BYTES {
        accepted_coding(request_headers, policy)
    } else {
        ContentEncoding::Identity
    };

    let tag = revalidation
        .filter(|_| status.is_success())
        .map(|r| r.tag(request_headers, policy));

    if let Some(tag) = &tag {
        if matches_if_none_match(request_headers, tag) {
            return with_etag(StatusCode::NOT_MODIFIED.into_response(), tag);
        }
    }

    let body = match compress(&body, encoding) {
        Ok(compressed) => compressed,
        Err(err) => {
            error!(error = %err, coding = encoding.as_str(), "failed to compress response");
            return (StatusCode::INTERNAL_SERVER_ERROR, "encoding failure").into_response();
        }
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::VARY, HeaderValue::from_static("accept-encoding"));
    if encoding != ContentEncoding::Identity {
        headers.insert(
            header::CONTENT_ENCODING,
            HeaderValue::from_static(encoding.as_str()),
        );
    }

    match tag {
        Some(tag) => with_etag(response, &tag),
        None => response,
    }
}

fn with_etag(mut response: Response, tag: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(tag) {
        response.headers_mut().insert(header::ETAG, value);
    }
    response
}
