//! `vending-core`: shared building blocks for the vending workspace.
//!
//! This crate contains **pure domain** primitives (no IO).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::MachineId;
pub use value_object::ValueObject;
