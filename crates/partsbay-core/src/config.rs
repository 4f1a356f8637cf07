// ── Catalog connection configuration ──

use partsbay_api::TransportConfig;
use secrecy::SecretString;
use url::Url;

/// Everything needed to talk to one catalog backend.
///
/// Built by `partsbay-config` from profiles/env/CLI flags and passed to
/// [`Catalog::new`](crate::Catalog::new).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Backend base URL (e.g. `https://api.partsbay.example`).
    pub base_url: Url,

    /// Stored admin token, sent as a bearer header when present.
    /// Anonymous clients can still read public collections.
    pub token: Option<SecretString>,

    /// Transport-level settings (timeouts).
    pub transport: TransportConfig,
}

impl CatalogConfig {
    /// Convenience constructor with default transport settings.
    pub fn new(base_url: Url, token: Option<SecretString>) -> Self {
        Self {
            base_url,
            token,
            transport: TransportConfig::default(),
        }
    }
}
