//! Catalog models
//!
//! Static menu data supplied at process start. The engine never mutates
//! these; it only resolves ids and reads prices.

pub mod modifier;
pub mod product;

// Re-exports
pub use modifier::*;
pub use product::*;
