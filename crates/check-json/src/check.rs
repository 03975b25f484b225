//! Check orchestration: fetch → decode → resolve → classify.

use thiserror::Error;
use tracing::debug;

use crate::config::CheckConfig;
use crate::decode::{decode_body, DecodeError};
use crate::fetch::{FetchError, Fetcher};
use crate::pointer::{self, PointerError};
use crate::status::{CheckResult, Status};

/// Terminal failure of one pipeline stage. Displays the stage error as-is.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Pointer(#[from] PointerError),
}

impl CheckError {
    /// A missing field is an anomaly, not a broken endpoint.
    pub fn status(&self) -> Status {
        match self {
            CheckError::Fetch(_) | CheckError::Decode(_) => Status::Critical,
            CheckError::Pointer(_) => Status::Warning,
        }
    }
}

impl From<CheckError> for CheckResult {
    fn from(err: CheckError) -> Self {
        CheckResult::new(err.status(), err.to_string())
    }
}

/// Run the check once and classify the outcome.
pub async fn run(config: &CheckConfig) -> CheckResult {
    match evaluate(config).await {
        Ok(message) => CheckResult::ok(message),
        Err(err) => {
            debug!(error = %err, status = %err.status(), "check failed");
            err.into()
        }
    }
}

/// Produce the OK message `<pointer>: <value>` or the first stage error.
pub async fn evaluate(config: &CheckConfig) -> Result<String, CheckError> {
    let fetcher = Fetcher::new(config.skip_cert_verify)?;
    let body = fetcher.get(&config.url).await?;
    let document = decode_body(body).await?;
    let value = pointer::resolve(&document, &config.pointer)?;
    Ok(format!("{}: {}", config.pointer, pointer::render(value)))
}
