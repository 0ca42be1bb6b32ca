//! Core types for Herbloom.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod product;
pub mod status;

pub use id::*;
pub use money::Money;
pub use product::Product;
pub use status::OrderStatus;
