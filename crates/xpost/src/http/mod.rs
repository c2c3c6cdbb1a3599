//! HTTP transport.
//!
//! All network calls of the crate go through [`HttpClient`]; endpoint paths
//! and wire types live in [`endpoints`].

pub(crate) mod client;
pub(crate) mod endpoints;

pub(crate) use client::HttpClient;
