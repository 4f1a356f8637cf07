// Catalog admin API HTTP client.
//
// Wraps `reqwest::Client` with PartsBay-specific URL construction,
// bearer-token injection, and list-envelope unwrapping. Endpoints are
// inherent methods; the verb helpers keep transport mechanics in one
// place.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    BrandList, BrandResponse, CategoryList, CreateBrandRequest, CreateDeviceTypeRequest,
    CreatePartCategoryRequest, DeviceTypeList, DeviceTypeResponse, GlobalCategoryResponse,
    PartCategoryResponse, UpdateBrandRequest, UpdateDeviceTypeRequest, UpdatePartCategoryRequest,
};

/// Error body shape used by every catalog endpoint on non-2xx responses.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

/// Async client for the catalog admin API.
///
/// All endpoints live under `{base}/api/`. If an admin token is present
/// it is sent as `Authorization: Bearer …` on every request; without one
/// the client still works against backends that allow anonymous reads.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a base URL and an optional stored admin token.
    pub fn new(
        base_url: &str,
        token: Option<&secrecy::SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = match token {
            Some(token) => {
                let mut headers = HeaderMap::new();
                let value = format!("Bearer {}", token.expose_secret());
                let mut value =
                    HeaderValue::from_str(&value).map_err(|e| Error::Authentication {
                        message: format!("invalid token header value: {e}"),
                    })?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
                transport.build_client_with_headers(headers)?
            }
            None => transport.build_client()?,
        };

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Normalize the base URL so it always ends with `/api/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }
        Ok(url)
    }

    /// Join a relative path (e.g. `"device-types"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn post_no_body(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        self.handle_empty(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Map a non-2xx response into [`Error`]. The backend's `error` field
    /// is the user-facing message; anything else falls back to the status
    /// line or raw body.
    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw.clone()
                }
            });

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::Authentication { message };
        }

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Device types ─────────────────────────────────────────────────

    pub async fn list_device_types(&self) -> Result<Vec<DeviceTypeResponse>, Error> {
        let list: DeviceTypeList = self.get("device-types").await?;
        Ok(list.device_types)
    }

    pub async fn create_device_type(
        &self,
        req: &CreateDeviceTypeRequest,
    ) -> Result<DeviceTypeResponse, Error> {
        self.post("device-types", req).await
    }

    pub async fn update_device_type(
        &self,
        id: &str,
        req: &UpdateDeviceTypeRequest,
    ) -> Result<DeviceTypeResponse, Error> {
        self.put(&format!("device-types/{id}"), req).await
    }

    pub async fn delete_device_type(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("device-types/{id}")).await
    }

    // ── Brands ───────────────────────────────────────────────────────
    //
    // The backend calls these "device categories"; the admin console
    // calls them brands. The path keeps the backend's name.

    pub async fn list_brands(&self) -> Result<Vec<BrandResponse>, Error> {
        let list: BrandList = self.get("device-categories").await?;
        Ok(list.brands)
    }

    pub async fn create_brand(&self, req: &CreateBrandRequest) -> Result<BrandResponse, Error> {
        self.post("device-categories", req).await
    }

    /// Full-document replace. Model-list changes travel through here.
    pub async fn update_brand(
        &self,
        id: &str,
        req: &UpdateBrandRequest,
    ) -> Result<BrandResponse, Error> {
        self.put(&format!("device-categories/{id}"), req).await
    }

    pub async fn delete_brand(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("device-categories/{id}")).await
    }

    // ── Part categories ──────────────────────────────────────────────

    pub async fn list_part_categories(&self) -> Result<Vec<PartCategoryResponse>, Error> {
        let list: CategoryList<PartCategoryResponse> = self.get("part-categories").await?;
        Ok(list.categories)
    }

    pub async fn create_part_category(
        &self,
        req: &CreatePartCategoryRequest,
    ) -> Result<PartCategoryResponse, Error> {
        self.post("part-categories", req).await
    }

    pub async fn patch_part_category(
        &self,
        id: &str,
        req: &UpdatePartCategoryRequest,
    ) -> Result<PartCategoryResponse, Error> {
        self.patch(&format!("part-categories/{id}"), req).await
    }

    /// Dedicated disable endpoint — the only part-category state change
    /// that is not a PATCH.
    pub async fn disable_part_category(&self, id: &str) -> Result<(), Error> {
        self.post_no_body(&format!("part-categories/{id}/disable"))
            .await
    }

    // ── Global category templates ────────────────────────────────────

    pub async fn list_global_categories(&self) -> Result<Vec<GlobalCategoryResponse>, Error> {
        let list: CategoryList<GlobalCategoryResponse> = self.get("categories").await?;
        Ok(list.categories)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_api_suffix() {
        let client =
            CatalogClient::from_reqwest("https://parts.example.com", reqwest::Client::new())
                .unwrap();
        assert_eq!(client.base_url().as_str(), "https://parts.example.com/api/");
    }

    #[test]
    fn base_url_with_existing_api_path_is_untouched() {
        let client =
            CatalogClient::from_reqwest("https://parts.example.com/api/", reqwest::Client::new())
                .unwrap();
        assert_eq!(client.base_url().as_str(), "https://parts.example.com/api/");
    }

    #[test]
    fn url_join_is_relative_to_api_root() {
        let client =
            CatalogClient::from_reqwest("https://parts.example.com", reqwest::Client::new())
                .unwrap();
        let url = client.url("device-types/abc").unwrap();
        assert_eq!(url.as_str(), "https://parts.example.com/api/device-types/abc");
    }
}
