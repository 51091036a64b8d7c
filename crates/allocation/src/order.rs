use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use fulfillment_core::{DomainError, DomainResult, ItemName, ValueObject};

/// Order line: item and requested quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item: ItemName,
    pub quantity: u64,
}

impl OrderLine {
    pub fn new(item: ItemName, quantity: u64) -> Self {
        Self { item, quantity }
    }
}

impl ValueObject for OrderLine {}

/// Customer order: requested quantity per item.
///
/// Lines keep insertion order (JSON document order on the wire). The
/// allocator walks items in exactly this order, so identical input always
/// produces identical shipments.
///
/// Invariants enforced at construction:
/// - each item appears at most once
/// - the total requested quantity fits in `u64`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: Vec<OrderLine>,
    total: u64,
}

impl Order {
    pub fn new(lines: impl IntoIterator<Item = OrderLine>) -> DomainResult<Self> {
        let lines: Vec<OrderLine> = lines.into_iter().collect();

        let total = {
            let mut seen = HashSet::with_capacity(lines.len());
            let mut total: u64 = 0;
            for line in &lines {
                if !seen.insert(line.item.as_str()) {
                    return Err(DomainError::validation(format!(
                        "duplicate order item: {}",
                        line.item
                    )));
                }
                total = total.checked_add(line.quantity).ok_or_else(|| {
                    DomainError::validation("total requested quantity overflows")
                })?;
            }
            total
        };

        Ok(Self { lines, total })
    }

    /// Convenience constructor from raw strings (validates every item name).
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, u64)>) -> DomainResult<Self> {
        let lines = pairs
            .into_iter()
            .map(|(item, qty)| -> DomainResult<OrderLine> {
                Ok(OrderLine::new(ItemName::new(item)?, qty))
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(lines)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// True when the order has no lines at all. An order whose lines are all
    /// zero is *not* empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all requested quantities.
    pub fn total_quantity(&self) -> u64 {
        self.total
    }

    pub fn requested(&self, item: &ItemName) -> Option<u64> {
        self.lines
            .iter()
            .find(|line| &line.item == item)
            .map(|line| line.quantity)
    }
}

impl ValueObject for Order {}

impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for line in &self.lines {
            map.serialize_entry(&line.item, &line.quantity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderVisitor;

        impl<'de> Visitor<'de> for OrderVisitor {
            type Value = Order;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of item name to requested quantity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Order, A::Error> {
                let mut lines = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((item, quantity)) = access.next_entry::<ItemName, u64>()? {
                    lines.push(OrderLine::new(item, quantity));
                }
                Order::new(lines).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(OrderVisitor)
    }
}
