//! # Catalog REST
//!
//! HTTP surface of the catalog service, built on Axum.
//! Serves product lookups by id, health probes, and the OpenAPI document.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
