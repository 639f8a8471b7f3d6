//! # Catalog Core
//!
//! Core types, traits, and error definitions for the catalog read-through
//! service. Every other crate in the workspace builds on the abstractions
//! defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
