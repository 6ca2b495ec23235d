// src/sim/config.rs

/// Cost and starting-state settings for a replenishment simulation.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// On-hand stock on day one.
    pub initial_inventory: f64,
    /// Cost of holding one unit for one day.
    pub unit_holding_cost: f64,
    /// Penalty per unit of unmet demand.
    pub stockout_cost: f64,
    /// Fixed cost per order placed.
    pub order_cost: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_inventory: 0.0,
            unit_holding_cost: 0.1,
            stockout_cost: 1.0,
            order_cost: 10.0,
        }
    }
}
