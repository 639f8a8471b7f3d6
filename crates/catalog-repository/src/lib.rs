//! # Catalog Repository
//!
//! Durable product store access. The service layer depends on the
//! [`ProductRepository`] trait; [`PostgresProductRepository`] implements it
//! on top of a shared SQLx [`DatabasePool`].
//!
//! ```text
//! ProductService
//!   ↓  Arc<dyn ProductRepository>
//! PostgresProductRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! PostgreSQL
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
