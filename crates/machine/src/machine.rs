//! The catalogue engine.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use vending_core::{DomainError, DomainResult, MachineId};
use vending_logging::{LogLevel, Logger, LoggerRegistry};

use crate::entry::CatalogueEntry;
use crate::item::Item;

/// A vending machine: one catalogue plus the sinks it reports to.
///
/// ## Locking
///
/// Every catalogue operation holds the catalogue mutex for its entire
/// duration, log fan-out included, so operations from concurrent callers are
/// totally ordered. Sinks must therefore not call back into the same machine.
/// The sink list has its own lock and can be changed from any thread.
///
/// ## Outcomes
///
/// Caller mistakes (negative quantities) are returned as
/// [`DomainError::InvalidArgument`] before anything is attempted. Everything
/// else (unknown item, not enough money, empty stock) is an ordinary `false`
/// plus a warning line. A restock that would overflow the quantity is dropped
/// and reported with a critical line only.
#[derive(Debug)]
pub struct VendingMachine {
    id: MachineId,
    catalogue: Mutex<Vec<CatalogueEntry>>,
    loggers: LoggerRegistry,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::with_id(MachineId::new())
    }
}

impl VendingMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: MachineId) -> Self {
        Self {
            id,
            catalogue: Mutex::new(Vec::new()),
            loggers: LoggerRegistry::new(),
        }
    }

    pub fn id(&self) -> MachineId {
        self.id
    }

    /// Add one unit of `item`. Same as `add_items(item, 1)`.
    pub fn add_item(&self, item: &Item) {
        self.restock(item, 1);
    }

    /// Add `quantity` units of `item`.
    ///
    /// Unknown items get a new entry and the catalogue is re-sorted by
    /// (category, price). Known items have their stock raised; if that would
    /// overflow, stock is left unchanged and a critical line is logged.
    pub fn add_items(&self, item: &Item, quantity: i64) -> DomainResult<()> {
        ensure_non_negative(quantity)?;
        self.restock(item, quantity);
        Ok(())
    }

    /// Remove the entry for `item` regardless of its stock.
    pub fn remove_item(&self, item: &Item) -> bool {
        let mut catalogue = self.catalogue();

        match catalogue.iter().position(|e| e.item() == item) {
            Some(index) => {
                catalogue.remove(index);
                self.log(
                    format_args!("Removed item from vending machine: '{item}'"),
                    LogLevel::Info,
                );
                true
            }
            None => {
                self.log(
                    format_args!("Cannot find item to remove from vending machine: '{item}'"),
                    LogLevel::Warning,
                );
                false
            }
        }
    }

    /// Take `quantity` units of `item` out of stock, clamping at zero.
    ///
    /// The entry stays in the catalogue even at zero stock; use
    /// [`remove_item`](Self::remove_item) to drop it. Returns whether the item
    /// was found.
    pub fn reduce_quantity(&self, item: &Item, quantity: i64) -> DomainResult<bool> {
        ensure_non_negative(quantity)?;

        let mut catalogue = self.catalogue();
        let Some(entry) = find_mut(&mut catalogue, item) else {
            self.log(
                format_args!(
                    "Cannot find item to reduce quantity of from vending machine: '{item}'"
                ),
                LogLevel::Warning,
            );
            return Ok(false);
        };

        // Both operands are non-negative, so this cannot overflow.
        let remaining = entry.quantity() - quantity;
        if remaining < 0 {
            entry.set_quantity(0);
            self.log(
                format_args!(
                    "Quantity for '{item}' reduced to negative \
                     ({remaining}; was reduced by {quantity}). Setting quantity to zero."
                ),
                LogLevel::Warning,
            );
        } else {
            entry.set_quantity(remaining);
            self.log(
                format_args!("Quantity for '{item}' reduced by {quantity} to {remaining}."),
                LogLevel::Info,
            );
        }

        Ok(true)
    }

    /// Sell exactly one unit of `item` for `money`.
    ///
    /// Fails (returns `false`) when the item is unknown, `money` is below the
    /// price, or the item is out of stock, checked in that order. No change is
    /// given.
    pub fn buy(&self, item: &Item, money: u64) -> bool {
        let mut catalogue = self.catalogue();
        let Some(entry) = find_mut(&mut catalogue, item) else {
            self.log(
                format_args!("Item '{item}' does not exist in the vending machine!"),
                LogLevel::Warning,
            );
            return false;
        };

        if money < entry.item().price() {
            self.log(
                format_args!("Cannot buy item '{item}', not enough money given!"),
                LogLevel::Warning,
            );
            return false;
        }

        if !entry.is_in_stock() {
            self.log(
                format_args!("Cannot buy item '{item}', it has no stock in the vending machine!"),
                LogLevel::Warning,
            );
            return false;
        }

        entry.set_quantity(entry.quantity() - 1);
        self.log(format_args!("Item bought: '{item}'"), LogLevel::Info);
        true
    }

    /// Snapshot of the catalogue in (category, price) order.
    ///
    /// Entries share their `Arc<Item>` with the machine but carry their own
    /// quantity; nothing done to the snapshot reaches the machine.
    pub fn get_catalogue(&self) -> Vec<CatalogueEntry> {
        self.catalogue().clone()
    }

    pub fn clear_catalogue(&self) {
        let mut catalogue = self.catalogue();
        let dropped = catalogue.len();
        catalogue.clear();
        self.log(
            format_args!("Cleared vending machine catalogue, {dropped} entries removed"),
            LogLevel::Info,
        );
    }

    /// Current stock of `item`, or `None` when it has no entry.
    pub fn quantity_of(&self, item: &Item) -> Option<i64> {
        self.catalogue()
            .iter()
            .find(|e| e.item() == item)
            .map(CatalogueEntry::quantity)
    }

    /// Number of entries (not units) in the catalogue.
    pub fn len(&self) -> usize {
        self.catalogue().len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogue().is_empty()
    }

    pub fn add_logger(&self, logger: Arc<dyn Logger>) {
        self.loggers.add(logger);
    }

    /// Unregister `logger` (by sink identity). Returns whether it was registered.
    pub fn remove_logger(&self, logger: &Arc<dyn Logger>) -> bool {
        self.loggers.remove(logger)
    }

    pub fn clear_loggers(&self) {
        self.loggers.clear();
    }

    pub fn logger_count(&self) -> usize {
        self.loggers.len()
    }

    fn restock(&self, item: &Item, quantity: i64) {
        let mut catalogue = self.catalogue();

        if let Some(existing) = find_mut(&mut catalogue, item) {
            let current = existing.quantity();
            let Some(total) = current.checked_add(quantity) else {
                self.log(
                    format_args!(
                        "Integer overflow when restocking items in vending machine. \
                         Item '{item}', current quantity {current}, attempted add {quantity}"
                    ),
                    LogLevel::Critical,
                );
                return;
            };

            existing.set_quantity(total);
            self.log(
                format_args!(
                    "Changed stock of existing item in vending machine: '{item}', \
                     added quantity {quantity}, total new quantity {total}"
                ),
                LogLevel::Info,
            );
            return;
        }

        catalogue.push(CatalogueEntry::stocked(item.clone(), quantity));
        // Stable: equal (category, price) keys keep insertion order.
        catalogue.sort_by_key(|e| e.item().sort_key());
        self.log(
            format_args!("Added new item to vending machine: '{item}', quantity {quantity}"),
            LogLevel::Info,
        );
    }

    fn log(&self, args: core::fmt::Arguments<'_>, level: LogLevel) {
        tracing::debug!(target: "vending::machine", machine = %self.id, %level, "{args}");
        self.loggers.log_args(args, level);
    }

    fn catalogue(&self) -> MutexGuard<'_, Vec<CatalogueEntry>> {
        // Quantities are computed before they are written, so a panic while the
        // lock is held can't leave a half-applied entry behind.
        self.catalogue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn find_mut<'a>(
    catalogue: &'a mut [CatalogueEntry],
    item: &Item,
) -> Option<&'a mut CatalogueEntry> {
    catalogue.iter_mut().find(|e| e.item() == item)
}

fn ensure_non_negative(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::invalid_argument(format!(
            "quantity must be non-negative (got {quantity})"
        )));
    }
    Ok(())
}
