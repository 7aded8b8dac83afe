//! Cross-cutting building blocks for Testify HTTP services: the JSON error
//! body, health handlers, request-id middleware, tracing setup and sea-orm helpers.

pub mod error;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
