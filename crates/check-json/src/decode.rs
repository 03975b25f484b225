//! Response body decoding.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::fetch::ResponseBody;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body could not be read off the connection.
    #[error("{0}")]
    Read(#[source] reqwest::Error),
    /// The body is not well-formed JSON. Displays serde_json's diagnostic.
    #[error("{0}")]
    Syntax(#[source] serde_json::Error),
}

/// Read `body` to the end and decode it.
///
/// The body is consumed here, so the connection is released on every
/// return path.
pub async fn decode_body(body: ResponseBody) -> Result<Value, DecodeError> {
    let url = body.url().to_string();
    let bytes = body.bytes().await.map_err(DecodeError::Read)?;
    debug!(%url, len = bytes.len(), "decoding response body");
    decode_slice(&bytes)
}

/// Decode the first JSON value in `input`. Bytes after it are ignored.
pub fn decode_slice(input: &[u8]) -> Result<Value, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(input);
    Value::deserialize(&mut de).map_err(DecodeError::Syntax)
}
