//! This library contains everything NFT Checker needs to talk to the OpenSea
//! API and to present its numbers. The CLI is a thin layer on top of it.

/// Display helpers for wei amounts, large counts and signed percentages.
#[cfg(feature = "format")]
pub mod format;

/// OpenSea v1 REST API bindings. This includes the response models, the HTTP
/// client and the classification of failed requests into a small set of
/// [`opensea::ErrorKind`]s.
#[cfg(feature = "opensea")]
pub mod opensea;
