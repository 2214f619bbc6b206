// folio-api: Async Rust client for the portfolio REST backend

pub mod cache_bust;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

pub use cache_bust::add_cache_buster;
pub use client::{ApiClient, Auth};
pub use error::Error;
pub use transport::TransportConfig;
