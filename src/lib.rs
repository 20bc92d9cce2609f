//! Jama Connect REST API client library.
//!
//! A typed async client for the Jama Connect REST API. The low-level
//! [`JamaClient`] handles authentication (basic auth or OAuth2 client
//! credentials with transparent token renewal), uniform HTTP status
//! checking, and multi-page aggregation of collection endpoints; the
//! per-resource operations live under [`apis`].
//!
//! # Quick Start
//!
//! ```no_run
//! use jamapi::apis::ItemsApi;
//! use jamapi::{Credentials, JamaClient, DEFAULT_PAGE_SIZE};
//!
//! #[tokio::main]
//! async fn main() -> jamapi::Result<()> {
//!     // Create a client from environment variables
//!     let client = JamaClient::from_env().await?;
//!
//!     // Fetch every item in a project, across all pages
//!     let items = ItemsApi::new(client.clone());
//!     let envelope = items.get_items(82, DEFAULT_PAGE_SIZE).await?;
//!     println!("Found {} items", envelope.data_len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`JamaClient`] — transport, auth lifecycle, status interpretation,
//!   and the paginated [`JamaClient::get_all`] entry point.
//! - [`Envelope`] — the vendor's fixed `meta`/`links`/`linked`/`data`
//!   response wrapper, with the page-merge operation pagination relies on.
//! - [`apis`] — one thin module per resource family (items, projects,
//!   relationships, baselines, tags, users, ...), each a pure mapping
//!   from typed arguments to a path, query parameters, and body.
//!
//! # Configuration
//!
//! [`JamaClient::from_env`] reads `JAMA_HOST` plus either
//! `JAMA_CLIENT_ID`/`JAMA_CLIENT_SECRET` (OAuth) or
//! `JAMA_USERNAME`/`JAMA_PASSWORD` (basic auth). Everything else
//! (API version prefix, timeout, TLS verification) is configured through
//! [`JamaClient::builder`].

mod auth;
mod client;
mod error;
mod response;

pub mod apis;

// Re-export core types
pub use auth::Credentials;
pub use client::{JamaClient, JamaClientBuilder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use error::{JamaError, Result};
pub use response::{Envelope, PageInfo};
