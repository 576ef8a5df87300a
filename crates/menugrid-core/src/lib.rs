//! Core types, configuration schema, and validation for the Menugrid engine.
//!
//! This crate provides the foundational types used across the other menugrid
//! crates:
//! - Catalog snapshot types (products and product groups)
//! - Slide configuration types (group selections, menu slides)
//! - The versioned template configuration schema
//! - Configuration validation
//! - Error types

pub mod config;
pub mod errors;
pub mod types;
pub mod validate;

pub use config::*;
pub use errors::*;
pub use types::*;
pub use validate::*;
