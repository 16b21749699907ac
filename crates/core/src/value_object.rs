//! Value object trait: equality by value, not identity.
//!
//! Catalogue lookups rely on this: an item built at the call site must find the
//! entry created from a different, but equal, item value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Implementors must
/// keep `Eq` and `Hash` consistent: equal values hash identically, and nothing
/// reachable through the public API can change either result after
/// construction.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Coin {
///     value: u64,
/// }
///
/// impl ValueObject for Coin {}
///
/// assert_eq!(Coin { value: 10 }, Coin { value: 10 });
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
