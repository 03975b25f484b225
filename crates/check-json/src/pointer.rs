//! JSON pointer resolution (RFC 6901) over `serde_json::Value`.
//!
//! Unlike `Value::pointer`, resolution failures carry the reason the
//! traversal stopped, so the operator can tell a missing key from an
//! out-of-range index.

use serde_json::Value;
use thiserror::Error;

/// Pointer could not be resolved against the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid JSON pointer: {pointer:?}: {reason}")]
pub struct PointerError {
    /// The full pointer expression as given.
    pub pointer: String,
    pub reason: Reason,
}

/// Why traversal stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("pointer must be empty or start with '/'")]
    MissingLeadingSlash,
    #[error("key {key:?} not found in object")]
    KeyNotFound { key: String },
    #[error("array index {segment:?} is not a non-negative integer")]
    InvalidIndex { segment: String },
    #[error("array index {index} out of bounds (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("cannot descend into {kind} with segment {segment:?}")]
    ScalarNode { kind: &'static str, segment: String },
}

/// Resolve `pointer` against `root`.
///
/// The empty pointer resolves to `root` itself.
pub fn resolve<'a>(root: &'a Value, pointer: &str) -> Result<&'a Value, PointerError> {
    let fail = |reason: Reason| PointerError {
        pointer: pointer.to_string(),
        reason,
    };

    if pointer.is_empty() {
        return Ok(root);
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(fail(Reason::MissingLeadingSlash));
    };

    let mut current = root;
    for raw in rest.split('/') {
        let segment = unescape(raw);
        current = match current {
            Value::Object(map) => map
                .get(&segment)
                .ok_or_else(|| fail(Reason::KeyNotFound { key: segment.clone() }))?,
            Value::Array(items) => {
                let index = parse_index(&segment)
                    .ok_or_else(|| fail(Reason::InvalidIndex { segment: segment.clone() }))?;
                items.get(index).ok_or_else(|| {
                    fail(Reason::IndexOutOfBounds {
                        index,
                        len: items.len(),
                    })
                })?
            }
            scalar => {
                return Err(fail(Reason::ScalarNode {
                    kind: kind_of(scalar),
                    segment,
                }));
            }
        };
    }

    Ok(current)
}

/// Render a resolved value for the result message.
///
/// Strings are written raw; every other value uses its compact JSON form.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decode `~1` and `~0` escapes, in that order.
fn unescape(segment: &str) -> String {
    if segment.contains('~') {
        segment.replace("~1", "/").replace("~0", "~")
    } else {
        segment.to_string()
    }
}

/// Array index token: decimal digits, no leading zeros.
fn parse_index(segment: &str) -> Option<usize> {
    let valid = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if valid { segment.parse().ok() } else { None }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
