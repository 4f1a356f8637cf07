// ── HTTP transport configuration ──
//
// Small wrapper over reqwest::ClientBuilder so every client in the
// workspace is constructed the same way (timeouts, default headers).

use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::error::Error;

/// Transport-level settings shared by every API client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout.
    pub timeout: Duration,

    /// Connect timeout, applied separately from the request timeout.
    pub connect_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this configuration.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        Ok(self.builder().build()?)
    }

    /// Build a `reqwest::Client` with a set of default headers
    /// (e.g. the admin `Authorization` header) applied to every request.
    pub fn build_client_with_headers(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        Ok(self.builder().default_headers(headers).build()?)
    }

    fn builder(&self) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(concat!("partsbay/", env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts() {
        let cfg = TransportConfig::default();
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert_eq!(cfg.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn builds_client() {
        let cfg = TransportConfig::default();
        assert!(cfg.build_client().is_ok());
    }
}
