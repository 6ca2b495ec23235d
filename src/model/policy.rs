use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which sizing rule produced `order_quantity`.
///
/// The fallback branches are recorded here so a zero quantity is always
/// attributable to a decision, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderQuantityMethod {
    /// Economic order quantity; both cost inputs were positive.
    EconomicOrderQuantity,
    /// Configured fallback lot size; a cost input was zero.
    FixedBatch,
    /// A cost input was zero and no fallback lot size was configured.
    Zero,
}

/// Replenishment policy for one SKU at one location.
///
/// Fully determined by the forecast and parameters it was computed
/// from; recomputed on every forecast refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryPolicy {
    pub sku_id: String,
    pub location_id: String,
    /// Buffer stock above expected demand over the protection interval.
    pub safety_stock: f64,
    /// Inventory position at which to trigger a replenishment order.
    pub reorder_point: f64,
    /// Units per replenishment order.
    pub order_quantity: f64,
    /// Model-implied probability of stocking out during a cycle.
    pub stockout_probability: f64,
    pub order_quantity_method: OrderQuantityMethod,
    pub computed_at: DateTime<Utc>,
}
