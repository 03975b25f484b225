//! HTTP fetcher.
//!
//! Issues a single GET against the configured URL. No retries, no
//! timeout beyond the client defaults, and the status code is not
//! inspected: whatever body the server returns is handed to the decoder.

use std::error::Error as _;

use bytes::Bytes;
use reqwest::{Client, Response};
use thiserror::Error;
use tracing::{debug, warn};
use url::{ParseError, Url};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Get {url}: unsupported protocol scheme {scheme:?}")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("Get {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: ParseError,
    },
    #[error("Get {url}: {}", source_chain(.source))]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Response body of a successful request.
///
/// Owns the underlying connection; dropping it releases the connection
/// whether or not the body was read.
#[derive(Debug)]
pub struct ResponseBody {
    url: String,
    response: Response,
}

impl ResponseBody {
    /// URL the body was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP status the server answered with.
    pub fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.response.status().is_success()
    }

    /// Read the remaining body to the end.
    pub async fn bytes(self) -> Result<Bytes, reqwest::Error> {
        self.response.bytes().await
    }
}

/// One-shot HTTP GET client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher, optionally skipping TLS certificate verification.
    pub fn new(skip_cert_verify: bool) -> Result<Self, FetchError> {
        if skip_cert_verify {
            warn!("TLS certificate verification disabled");
        }
        let client = Client::builder()
            .danger_accept_invalid_certs(skip_cert_verify)
            .user_agent(concat!("check-json/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and return its body.
    pub async fn get(&self, url: &str) -> Result<ResponseBody, FetchError> {
        let target = parse_url(url)?;
        debug!(%url, "sending request");

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let body = ResponseBody {
            url: url.to_string(),
            response,
        };
        if body.is_success() {
            debug!(status = body.status(), %url, "response received");
        } else {
            debug!(status = body.status(), %url, "non-2xx response, decoding body anyway");
        }

        Ok(body)
    }
}

/// `reqwest` keeps the useful part (refused connection, rejected
/// certificate) in its source chain; fold it into one line.
fn source_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}

/// Parse and validate a target URL. Only `http` and `https` are accepted;
/// a string without a scheme reports the empty scheme.
pub fn parse_url(url: &str) -> Result<Url, FetchError> {
    let unsupported = |scheme: &str| FetchError::UnsupportedScheme {
        url: url.to_string(),
        scheme: scheme.to_string(),
    };

    match Url::parse(url) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(unsupported(other)),
        },
        Err(ParseError::RelativeUrlWithoutBase) => Err(unsupported("")),
        Err(source) => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        }),
    }
}
