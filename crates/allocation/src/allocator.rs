//! Greedy, positional order allocation.
//!
//! One pass over the warehouses in caller order, one inner pass over the
//! order's items. Each warehouse is visited at most once; the first warehouses
//! are the preferred sources. The order is all-or-nothing: if the combined
//! stock cannot cover every line, no shipments are returned.

use serde::Serialize;

use fulfillment_core::ItemName;
use fulfillment_inventory::WarehouseInventory;

use crate::order::Order;
use crate::shipment::{Shipment, ShipmentList};

/// Item still missing after every warehouse was scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub item: ItemName,
    pub requested: u64,
    pub missing: u64,
}

/// Why an allocation produced no shipments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// The order has no lines.
    EmptyOrder,
    /// No warehouses were supplied.
    NoWarehouses,
    /// Combined stock falls short for at least one item.
    Unsatisfiable { shortfalls: Vec<Shortfall> },
}

/// A fully satisfied allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationPlan {
    /// Contributing warehouses only, in input order.
    pub shipments: ShipmentList,
    /// Every input warehouse (same order) with the shipped units removed.
    pub residual: Vec<WarehouseInventory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AllocationOutcome {
    Fulfilled(AllocationPlan),
    Rejected(Rejection),
}

impl AllocationOutcome {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, AllocationOutcome::Fulfilled(_))
    }

    /// Collapse to the plain shipment list: every rejection becomes an empty list.
    pub fn into_shipments(self) -> ShipmentList {
        match self {
            AllocationOutcome::Fulfilled(plan) => plan.shipments,
            AllocationOutcome::Rejected(_) => ShipmentList::new(),
        }
    }
}

/// Allocate `order` across `warehouses`, preferring earlier warehouses.
///
/// Returns an empty list when the order or the warehouse list is empty, and
/// when the order cannot be fully satisfied. Inputs are never mutated.
pub fn allocate(order: &Order, warehouses: &[WarehouseInventory]) -> ShipmentList {
    plan(order, warehouses).into_shipments()
}

/// Same algorithm as [`allocate`], keeping the detail `allocate` discards:
/// residual stock on success, the rejection reason otherwise.
pub fn plan(order: &Order, warehouses: &[WarehouseInventory]) -> AllocationOutcome {
    if order.is_empty() {
        tracing::info!(warehouses = warehouses.len(), "empty order; nothing to allocate");
        return AllocationOutcome::Rejected(Rejection::EmptyOrder);
    }
    if warehouses.is_empty() {
        tracing::info!(items = order.len(), "no warehouses; nothing to allocate");
        return AllocationOutcome::Rejected(Rejection::NoWarehouses);
    }

    // Remaining quantity per order line, indexed like `order.lines()`.
    let mut remaining: Vec<u64> = order.lines().iter().map(|line| line.quantity).collect();
    let mut total_remaining = order.total_quantity();
    let mut residual = warehouses.to_vec();
    let mut shipments = Vec::new();

    for warehouse in residual.iter_mut() {
        if total_remaining == 0 {
            break;
        }

        let mut shipment = Shipment::new(warehouse.name.clone());
        for (line, wanted) in order.lines().iter().zip(remaining.iter_mut()) {
            if *wanted == 0 {
                continue;
            }
            let Some(taken) = warehouse.inventory.draw(&line.item, *wanted) else {
                continue;
            };
            if taken == 0 {
                continue;
            }
            shipment.push(line.item.clone(), taken);
            *wanted -= taken;
            total_remaining -= taken;
        }

        if !shipment.is_empty() {
            tracing::debug!(
                warehouse = %warehouse.name,
                units = shipment.total_quantity(),
                total_remaining,
                "drew stock from warehouse"
            );
            shipments.push(shipment);
        }
    }

    if total_remaining > 0 {
        let shortfalls: Vec<Shortfall> = order
            .lines()
            .iter()
            .zip(&remaining)
            .filter(|(_, missing)| **missing > 0)
            .map(|(line, missing)| Shortfall {
                item: line.item.clone(),
                requested: line.quantity,
                missing: *missing,
            })
            .collect();
        tracing::debug!(
            missing_units = total_remaining,
            short_items = shortfalls.len(),
            "order cannot be fully satisfied; discarding partial shipments"
        );
        return AllocationOutcome::Rejected(Rejection::Unsatisfiable { shortfalls });
    }

    AllocationOutcome::Fulfilled(AllocationPlan {
        shipments: ShipmentList::from(shipments),
        residual,
    })
}
