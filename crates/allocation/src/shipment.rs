use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use fulfillment_core::{DomainError, DomainResult, ItemName, ValueObject, WarehouseName};

/// Quantity of one item drawn from one warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentLine {
    pub item: ItemName,
    pub quantity: u64,
}

impl ValueObject for ShipmentLine {}

/// The portion of an order fulfilled from a single warehouse.
///
/// Wire shape is a single-key object: `{"owd": {"apple": 5, "orange": 5}}`.
/// Lines follow the order's item order. Quantities are always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    warehouse: WarehouseName,
    lines: Vec<ShipmentLine>,
}

impl Shipment {
    pub(crate) fn new(warehouse: WarehouseName) -> Self {
        Self {
            warehouse,
            lines: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, item: ItemName, quantity: u64) {
        debug_assert!(quantity > 0, "shipment lines carry positive quantities");
        self.lines.push(ShipmentLine { item, quantity });
    }

    /// Build a shipment from raw strings, e.g. for expected values in tests
    /// or when reading a stored allocation back.
    pub fn from_pairs<'a>(
        warehouse: &str,
        lines: impl IntoIterator<Item = (&'a str, u64)>,
    ) -> DomainResult<Self> {
        let mut shipment = Self::new(WarehouseName::new(warehouse)?);
        for (item, quantity) in lines {
            shipment.try_push(ItemName::new(item)?, quantity)?;
        }
        Ok(shipment)
    }

    fn try_push(&mut self, item: ItemName, quantity: u64) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::invariant(format!(
                "shipment line for {item} must carry a positive quantity"
            )));
        }
        if self.lines.iter().any(|line| line.item == item) {
            return Err(DomainError::invariant(format!(
                "item {item} appears twice in shipment from {}",
                self.warehouse
            )));
        }
        self.lines.push(ShipmentLine { item, quantity });
        Ok(())
    }

    pub fn warehouse(&self) -> &WarehouseName {
        &self.warehouse
    }

    pub fn lines(&self) -> &[ShipmentLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of `item` in this shipment (0 when absent).
    pub fn quantity_of(&self, item: &ItemName) -> u64 {
        self.lines
            .iter()
            .find(|line| &line.item == item)
            .map_or(0, |line| line.quantity)
    }

    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

impl ValueObject for Shipment {}

struct LinesRef<'a>(&'a [ShipmentLine]);

impl Serialize for LinesRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for line in self.0 {
            map.serialize_entry(&line.item, &line.quantity)?;
        }
        map.end()
    }
}

impl Serialize for Shipment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.warehouse, &LinesRef(&self.lines))?;
        map.end()
    }
}

struct Lines(Vec<(ItemName, u64)>);

impl<'de> Deserialize<'de> for Lines {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinesVisitor;

        impl<'de> Visitor<'de> for LinesVisitor {
            type Value = Lines;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of item name to shipped quantity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Lines, A::Error> {
                let mut lines = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<ItemName, u64>()? {
                    lines.push(entry);
                }
                Ok(Lines(lines))
            }
        }

        deserializer.deserialize_map(LinesVisitor)
    }
}

impl<'de> Deserialize<'de> for Shipment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShipmentVisitor;

        impl<'de> Visitor<'de> for ShipmentVisitor {
            type Value = Shipment;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a single-key map of warehouse name to shipped items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Shipment, A::Error> {
                let (warehouse, Lines(lines)) = access
                    .next_entry::<WarehouseName, Lines>()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
                if access.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom("shipment must name exactly one warehouse"));
                }

                let mut shipment = Shipment::new(warehouse);
                for (item, quantity) in lines {
                    shipment
                        .try_push(item, quantity)
                        .map_err(<A::Error as de::Error>::custom)?;
                }
                Ok(shipment)
            }
        }

        deserializer.deserialize_map(ShipmentVisitor)
    }
}

/// Ordered shipments, one per contributing warehouse, in input priority order.
///
/// Empty means "nothing to ship": either the request was trivially empty or
/// the order could not be fully satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentList(Vec<Shipment>);

impl ShipmentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Shipment> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Shipment] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Shipment> {
        self.0
    }

    /// Warehouses that contribute to this list, in shipping priority order.
    pub fn warehouses(&self) -> impl Iterator<Item = &WarehouseName> {
        self.0.iter().map(Shipment::warehouse)
    }

    /// Total quantity of `item` across every shipment.
    pub fn shipped_quantity(&self, item: &ItemName) -> u64 {
        self.0.iter().map(|s| s.quantity_of(item)).sum()
    }
}

impl ValueObject for ShipmentList {}

impl From<Vec<Shipment>> for ShipmentList {
    fn from(value: Vec<Shipment>) -> Self {
        Self(value)
    }
}

impl IntoIterator for ShipmentList {
    type Item = Shipment;
    type IntoIter = std::vec::IntoIter<Shipment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShipmentList {
    type Item = &'a Shipment;
    type IntoIter = core::slice::Iter<'a, Shipment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
