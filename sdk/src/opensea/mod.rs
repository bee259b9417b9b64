//! OpenSea v1 module provides read-only access to the OpenSea marketplace.
//!
//! This module allows for:
//! - Fetching collection metadata by slug
//! - Fetching aggregate market statistics of a collection
//! - Listing the assets of a contract (single page)
//! - Fetching an individual asset by contract address and token ID
//!
//! Every failure is classified into an [`ErrorKind`] before it leaves the
//! client.

mod client;
mod error;
mod models;

// Re-exports
pub use {client::*, error::*, models::*};
