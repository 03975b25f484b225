//! Check configuration.

/// Inputs of a single check run. Built once by the caller, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// URL to fetch.
    pub url: String,
    /// JSON pointer to resolve inside the response document.
    pub pointer: String,
    /// Disable TLS peer certificate validation.
    pub skip_cert_verify: bool,
}

impl CheckConfig {
    pub fn new(url: impl Into<String>, pointer: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pointer: pointer.into(),
            skip_cert_verify: false,
        }
    }

    /// Toggle certificate verification off (or back on).
    pub fn with_skip_cert_verify(mut self, skip: bool) -> Self {
        self.skip_cert_verify = skip;
        self
    }
}
