//! Vending machine domain module.
//!
//! Item model plus the thread-safe catalogue engine. Output goes exclusively
//! through the injected `vending-logging` sinks (no direct IO).

pub mod entry;
pub mod item;
pub mod machine;

pub use entry::CatalogueEntry;
pub use item::{Item, ItemCategory};
pub use machine::VendingMachine;
