//! Persistence API client for Folio Studio.
//!
//! This crate owns the only asynchronous boundary of the editing core: the
//! request/response calls that create or update entities on the server.
//!
//! - [`Persistence`]: the seam editors depend on (mockable in tests)
//! - [`HttpPersistence`]: JSON-over-HTTP implementation built on `reqwest`
//! - [`ClientConfig`]: base URL and timeout
//! - [`ClientError`]: network, server and decoding failures
//!
//! # Example
//!
//! ```ignore
//! use folio_client::{ClientConfig, HttpPersistence, Persistence};
//!
//! let client = HttpPersistence::new(&ClientConfig::new("https://folio.example/api"))?;
//! let entity = client.save(&payload, "user-1").await?;
//! ```

mod config;
mod error;
mod http;
mod persistence;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, Result};
pub use http::HttpPersistence;
pub use persistence::{Persistence, is_update};
