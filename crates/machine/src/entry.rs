use std::sync::Arc;

use serde::Serialize;

use vending_core::{DomainError, DomainResult};

use crate::item::Item;

/// One catalogue line: an item and how many units of it are stocked.
///
/// The item is shared (`Arc`) between the machine and any snapshot taken from
/// it. The quantity is not: a snapshot entry is a copy and can't be used to
/// change the machine's stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    item: Arc<Item>,
    quantity: i64,
}

impl CatalogueEntry {
    /// Fails with `InvalidArgument` when `quantity` is negative.
    pub fn new(item: impl Into<Arc<Item>>, quantity: i64) -> DomainResult<Self> {
        if quantity < 0 {
            return Err(DomainError::invalid_argument(
                "quantity must be non-negative",
            ));
        }
        Ok(Self::stocked(item, quantity))
    }

    /// Build an entry from a quantity the caller has already validated.
    pub(crate) fn stocked(item: impl Into<Arc<Item>>, quantity: i64) -> Self {
        debug_assert!(quantity >= 0, "entry quantity went negative: {quantity}");
        Self {
            item: item.into(),
            quantity,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn shared_item(&self) -> &Arc<Item> {
        &self.item
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        debug_assert!(quantity >= 0, "entry quantity went negative: {quantity}");
        self.quantity = quantity;
    }
}

impl core::fmt::Display for CatalogueEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, quantity {}", self.item, self.quantity)
    }
}
