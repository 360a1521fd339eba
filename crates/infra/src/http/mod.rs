//! HTTP transport used by the report API client

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
