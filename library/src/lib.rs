//! Core library for the voice platform console.
//!
//! Holds the domain model (assistants, calls, phone numbers, API keys,
//! workflows), mock data generators, and the in-memory stores that simulate
//! network latency for mutations. Nothing here touches the network or disk;
//! all state lives in memory for the lifetime of the session.

pub mod error;
pub mod mock;
pub mod model;
pub mod store;

pub use error::PlatformError;
pub use store::platform::Platform;
