use serde::Deserialize;

use fulfillment_allocation::Order;
use fulfillment_inventory::WarehouseInventory;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /allocations` and `POST /allocations/plan`.
///
/// Warehouse order in the array is the shipping priority.
#[derive(Debug, Deserialize)]
pub struct AllocationRequest {
    pub order: Order,
    pub warehouses: Vec<WarehouseInventory>,
}
