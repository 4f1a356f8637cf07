//! Canonical domain types for the catalog taxonomy.
//!
//! All persistent identifiers are opaque strings assigned by the backend.
//! Models are the exception to "everything has an id": a model lives
//! inside its brand's `models` array and is addressed by position only
//! ([`ModelRef`]).

pub mod brand;
pub mod taxonomy;

pub use brand::{Brand, Model, ModelRef};
pub use taxonomy::{DeviceType, GlobalCategory, PartCategory};
