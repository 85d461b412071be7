//! Tribunals search web frontend.
//!
//! A server-rendered view layer over the tribunals search API: concept
//! pages, document pages and a health-check landing page, each rendered
//! from the JSON the API returns.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod server;
