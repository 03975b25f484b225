//! check-json — a monitoring-plugin check for JSON HTTP APIs.
//!
//! Fetches a URL, decodes the response body as JSON, resolves a JSON
//! pointer inside it and classifies the outcome into the plugin
//! tri-state model.
//!
//! # Architecture
//!
//! ```text
//! run(CheckConfig)
//!   ├── fetch::Fetcher::get()      → ResponseBody   (CRITICAL on error)
//!   ├── decode::decode_body()      → serde_json::Value (CRITICAL on error)
//!   ├── pointer::resolve()         → &Value         (WARNING on error)
//!   └── CheckResult { status, message }
//! ```
//!
//! Every invocation produces exactly one [`CheckResult`]. The caller maps
//! it onto stdout and the process exit code via [`Status::exit_code`].

pub mod check;
pub mod config;
pub mod decode;
pub mod fetch;
pub mod pointer;
pub mod status;

pub use check::{run, CheckError};
pub use config::CheckConfig;
pub use status::{CheckResult, Status, CHECK_NAME};
