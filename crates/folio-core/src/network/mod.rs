//! Network utilities for HTTP operations.
//!
//! This module provides the HTTP client shared by the remote backends, with
//! timeout and user-agent handling in one place.

mod client;

pub use client::HttpClient;
