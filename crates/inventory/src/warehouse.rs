use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fulfillment_core::{DomainResult, ItemName, ValueObject, WarehouseName};

/// Available quantity per item in one warehouse.
///
/// Backed by an ordered map so serialized stock (e.g. residual inventory) is
/// reproducible. Lookup order is irrelevant to allocation: the order's line
/// order drives iteration, never the warehouse's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLevels(BTreeMap<ItemName, u64>);

impl StockLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. A repeated item overwrites the earlier quantity.
    pub fn with(mut self, item: ItemName, quantity: u64) -> Self {
        self.0.insert(item, quantity);
        self
    }

    /// Available quantity, or `None` when the warehouse does not stock the item
    /// at all (distinct from stocking it at zero).
    pub fn available(&self, item: &ItemName) -> Option<u64> {
        self.0.get(item).copied()
    }

    pub fn contains(&self, item: &ItemName) -> bool {
        self.0.contains_key(item)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, u64)> {
        self.0.iter().map(|(item, qty)| (item, *qty))
    }

    /// Draw up to `wanted` units of `item` from this stock, in place.
    ///
    /// - Enough on hand: exactly `wanted` is taken and the surplus stays.
    /// - Not enough: everything on hand is taken and the level drops to zero.
    ///
    /// Returns the quantity taken, or `None` when the item is not stocked here
    /// (nothing changes in that case).
    pub fn draw(&mut self, item: &ItemName, wanted: u64) -> Option<u64> {
        let on_hand = self.0.get_mut(item)?;
        if *on_hand >= wanted {
            *on_hand -= wanted;
            Some(wanted)
        } else {
            let taken = *on_hand;
            *on_hand = 0;
            Some(taken)
        }
    }
}

impl ValueObject for StockLevels {}

impl FromIterator<(ItemName, u64)> for StockLevels {
    fn from_iter<I: IntoIterator<Item = (ItemName, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A named stock location, listed in priority order by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseInventory {
    pub name: WarehouseName,
    pub inventory: StockLevels,
}

impl WarehouseInventory {
    pub fn new(name: WarehouseName, inventory: StockLevels) -> Self {
        Self { name, inventory }
    }

    /// Convenience constructor from raw strings (validates every name).
    pub fn from_pairs<'a>(
        name: &str,
        stock: impl IntoIterator<Item = (&'a str, u64)>,
    ) -> DomainResult<Self> {
        let inventory = stock
            .into_iter()
            .map(|(item, qty)| -> DomainResult<(ItemName, u64)> {
                Ok((ItemName::new(item)?, qty))
            })
            .collect::<DomainResult<StockLevels>>()?;
        Ok(Self::new(WarehouseName::new(name)?, inventory))
    }

    pub fn name(&self) -> &WarehouseName {
        &self.name
    }

    pub fn stock(&self) -> &StockLevels {
        &self.inventory
    }
}

impl ValueObject for WarehouseInventory {}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> ItemName {
        ItemName::new(name).unwrap()
    }

    #[test]
    fn draw_keeps_surplus_when_stock_suffices() {
        let mut stock = StockLevels::new().with(item("apple"), 5);
        assert_eq!(stock.draw(&item("apple"), 3), Some(3));
        assert_eq!(stock.available(&item("apple")), Some(2));
    }

    #[test]
    fn draw_exact_quantity_empties_the_level() {
        let mut stock = StockLevels::new().with(item("apple"), 4);
        assert_eq!(stock.draw(&item("apple"), 4), Some(4));
        assert_eq!(stock.available(&item("apple")), Some(0));
    }

    #[test]
    fn draw_takes_everything_when_short() {
        let mut stock = StockLevels::new().with(item("apple"), 2);
        assert_eq!(stock.draw(&item("apple"), 5), Some(2));
        assert_eq!(stock.available(&item("apple")), Some(0));
    }

    #[test]
    fn draw_of_unstocked_item_is_none_and_changes_nothing() {
        let mut stock = StockLevels::new().with(item("apple"), 2);
        let before = stock.clone();
        assert_eq!(stock.draw(&item("banana"), 1), None);
        assert_eq!(stock, before);
    }

    #[test]
    fn zero_stock_is_still_stocked() {
        let mut stock = StockLevels::new().with(item("apple"), 0);
        assert!(stock.contains(&item("apple")));
        assert_eq!(stock.draw(&item("apple"), 3), Some(0));
    }

    #[test]
    fn from_pairs_validates_names() {
        assert!(WarehouseInventory::from_pairs("owd", [("apple", 1)]).is_ok());
        assert!(WarehouseInventory::from_pairs(" ", [("apple", 1)]).is_err());
        assert!(WarehouseInventory::from_pairs("owd", [("", 1)]).is_err());
    }

    #[test]
    fn deserializes_wire_shape_and_rejects_negative_stock() {
        let wh: WarehouseInventory =
            serde_json::from_str(r#"{"name":"owd","inventory":{"apple":5,"orange":10}}"#).unwrap();
        assert_eq!(wh.name().as_str(), "owd");
        assert_eq!(wh.stock().available(&item("orange")), Some(10));
        assert_eq!(wh.stock().len(), 2);

        let err = serde_json::from_str::<WarehouseInventory>(
            r#"{"name":"owd","inventory":{"apple":-1}}"#,
        );
        assert!(err.is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a draw never creates stock and never takes more than asked.
            #[test]
            fn draw_conserves_units(on_hand in 0u64..10_000, wanted in 0u64..10_000) {
                let apple = item("apple");
                let mut stock = StockLevels::new().with(apple.clone(), on_hand);
                let taken = stock.draw(&apple, wanted).unwrap();
                let left = stock.available(&apple).unwrap();

                prop_assert_eq!(taken, on_hand.min(wanted));
                prop_assert_eq!(taken + left, on_hand);
            }
        }
    }
}
