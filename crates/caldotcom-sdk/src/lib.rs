//! Typed client for the Cal.com v2 REST API.
//!
//! The crate is organized around a single request engine shared by thin
//! resource wrappers:
//!
//! - [`CalClient`] - The entry point; one instance per credential set
//! - [`ClientOptions`] / [`AuthConfig`] - Construction-time configuration
//! - [`HttpClient`] - The engine: auth headers, URL/query building,
//!   per-attempt timeout, error classification, bounded retry
//! - [`Transport`] - Seam between the engine and the wire, so tests can
//!   substitute an in-memory transport
//! - [`types`] - Wire models mirroring the API's JSON shapes
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐   ┌─────────────┐   ┌────────────┐
//! │ CalClient │──▶│ resources:: │──▶│ HttpClient │
//! └───────────┘   └─────────────┘   └─────┬──────┘
//!                                         │ Transport
//!                                         ▼
//!                                  ┌──────────────┐
//!                                  │ reqwest/mock │
//!                                  └──────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use caldotcom_sdk::{CalClient, ClientOptions, AuthConfig};
//!
//! let options = ClientOptions::new(AuthConfig::api_key("cal_live_..."));
//! let client = CalClient::new(options);
//! let bookings = client.bookings().list(&Default::default()).await?;
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use auth::AuthConfig;
pub use client::CalClient;
pub use config::{
    ClientOptions, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT,
};
pub use error::{CalError, CalResult};
pub use http::{HttpClient, Query, RequestSpec};
pub use transport::{
    BoxFuture, Method, Transport, TransportFault, TransportRequest, TransportResponse,
};
