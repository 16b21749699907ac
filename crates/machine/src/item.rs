use serde::{Deserialize, Serialize};

use vending_core::ValueObject;

/// Item category. The discriminant drives catalogue ordering.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ItemCategory {
    #[default]
    Unspecified = 0,
    Food = 1,
    Drink = 2,
    Weapon = 3,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Unspecified,
        ItemCategory::Food,
        ItemCategory::Drink,
        ItemCategory::Weapon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Unspecified => "Unspecified",
            ItemCategory::Food => "Food",
            ItemCategory::Drink => "Drink",
            ItemCategory::Weapon => "Weapon",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable good.
///
/// Items are values: two items with the same name, price and category are the
/// same item as far as the catalogue is concerned. Fields are private so an
/// item stored in a catalogue can never drift away from its sort key or hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    /// Price in smallest currency unit.
    price: u64,
    category: ItemCategory,
}

impl ValueObject for Item {}

impl Item {
    pub fn new(name: impl Into<String>, price: u64, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }

    pub fn food(name: impl Into<String>, price: u64) -> Self {
        Self::new(name, price, ItemCategory::Food)
    }

    pub fn drink(name: impl Into<String>, price: u64) -> Self {
        Self::new(name, price, ItemCategory::Drink)
    }

    pub fn weapon(name: impl Into<String>, price: u64) -> Self {
        Self::new(name, price, ItemCategory::Weapon)
    }

    pub fn unspecified(name: impl Into<String>, price: u64) -> Self {
        Self::new(name, price, ItemCategory::Unspecified)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Catalogue sort key: category first, then price.
    pub fn sort_key(&self) -> (ItemCategory, u64) {
        (self.category, self.price)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, price: {}, category: {}",
            self.name, self.price, self.category
        )
    }
}
