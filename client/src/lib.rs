//! Synchronous client core for the Zettai to-do service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `ZettaiClient` is stateless — it holds only `base_url`.
//! - The single operation is split into `build_get_list` (produces the
//!   request) and `parse_get_list` (consumes the response), so the I/O
//!   boundary is explicit.
//! - The service speaks HTML, not JSON: parsing recovers the list from the
//!   page's heading and row patterns.
//! - Types are defined independently from the zettai-server crate;
//!   integration tests catch drift between the two.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ZettaiClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ListName, ToDoItem, ToDoList};
