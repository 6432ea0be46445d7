//! RAWG video game database integration.
//!
//! - [`client`]: URL building and response decoding
//! - [`context`]: request/response correlation through the host
//! - [`models`]: wire structs and their conversion into domain types

pub mod client;
pub mod context;
pub mod models;

pub use client::{decode, LookupRequest, RawgClient, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use context::RequestContext;
