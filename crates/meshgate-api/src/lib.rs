// meshgate-api: Async Rust client for the Meshgate access-control GraphQL API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod groups;
mod networks;
mod resources;

pub use client::GraphqlClient;
pub use error::Error;
pub use transport::TransportConfig;
