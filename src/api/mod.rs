//! Client for the external search API.
//!
//! Every call is a single independent GET returning JSON. There is no
//! caching, retrying or coordination between calls.

mod client;
mod error;

pub use client::{SearchApiClient, DEFAULT_API_URL};
pub use error::ApiError;
