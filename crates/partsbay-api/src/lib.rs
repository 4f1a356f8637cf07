//! Async HTTP client for the PartsBay catalog admin API.
//!
//! The admin backend exposes REST-style JSON endpoints for the four
//! taxonomy resources the device-management console works with:
//!
//! - **device types** (`/api/device-types`) — list/create/update/delete
//! - **brands** (`/api/device-categories`) — list/create/update/delete;
//!   update is a full-document replace, which is how model-list changes
//!   travel (models have no endpoint of their own)
//! - **part categories** (`/api/part-categories`) — list/create/patch plus
//!   a dedicated disable endpoint
//! - **global category templates** (`/api/categories`) — read-only
//!
//! [`CatalogClient`] owns URL construction, bearer-token injection,
//! list-envelope unwrapping (`deviceTypes` / `brands` / `categories`),
//! and mapping of non-2xx `{"error": "..."}` bodies into [`Error`].
//! Domain semantics live upstream in `partsbay-core`.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::CatalogClient;
pub use error::Error;
pub use transport::TransportConfig;
