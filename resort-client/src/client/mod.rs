//! Client module
//!
//! [`ResortClient`] over a pluggable [`HttpClient`] transport: the network
//! client in production, the oneshot client for in-process backends.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
mod resort_client;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
pub use resort_client::ResortClient;
