// src/sim/engine.rs

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::InventoryPolicy;
use crate::sim::config::SimulationConfig;
use crate::sim::pipeline::LeadTimePipeline;

// Serializable so runs can be exported to CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub day: usize,
    pub demand: f64,
    pub starting_inventory: f64,
    pub units_received: f64,
    pub units_filled: f64,
    pub stockout_qty: f64,
    pub order_placed: f64,
    pub ending_inventory: f64,
    pub holding_cost: f64,
    pub stockout_cost: f64,
    pub order_cost: f64,
    pub total_cost: f64,
}

/// KPI aggregate over one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub days: usize,
    /// Fraction of days with unmet demand.
    pub stockout_rate: f64,
    /// Fraction of days ending above twice the mean daily demand.
    pub overstock_rate: f64,
    /// Fraction of demanded units served from stock.
    pub fill_rate: f64,
    pub avg_ending_inventory: f64,
    pub orders_placed: usize,
    pub total_holding_cost: f64,
    pub total_stockout_cost: f64,
    pub total_order_cost: f64,
    pub total_cost: f64,
}

/// Replays a daily demand series against a fixed replenishment policy.
///
/// Each day: receive whatever the lead-time pipeline delivers, fill
/// demand from stock, and reorder `policy.order_quantity` whenever the
/// inventory position (on hand + in transit) falls below the reorder
/// point. Unmet demand is lost, not backlogged, as in a retail store.
pub struct ReplenishmentSimulation {
    config: SimulationConfig,
    policy: InventoryPolicy,
    pipeline: LeadTimePipeline,
    inventory: f64,
    current_day: usize,
    pub history: Vec<DailyRecord>,
}

impl ReplenishmentSimulation {
    /// `lead_time_days` comes from the forecast the policy was computed
    /// from; it is rounded to whole days for the pipeline, minimum one.
    pub fn new(config: SimulationConfig, policy: InventoryPolicy, lead_time_days: f64) -> Self {
        let delay = lead_time_days.round().max(1.0) as usize;
        Self {
            inventory: config.initial_inventory,
            config,
            policy,
            pipeline: LeadTimePipeline::new(delay),
            current_day: 0,
            history: Vec::new(),
        }
    }

    pub fn run(&mut self, demand: &[f64]) {
        for &quantity in demand {
            self.step(quantity);
        }
    }

    fn step(&mut self, demand: f64) {
        self.current_day += 1;

        // Morning: receive whatever arrives from the pipeline today.
        let starting_inventory = self.inventory;
        let units_received = self.pipeline.pop_arrival();
        self.inventory += units_received;

        // Day: fill demand from stock. Shortage is lost sales.
        let units_filled = demand.min(self.inventory);
        let stockout_qty = demand - units_filled;
        self.inventory -= units_filled;

        // Decision: reorder when the position crosses the reorder point.
        let position = self.inventory + self.pipeline.in_transit();
        let order_placed = if position < self.policy.reorder_point && self.policy.order_quantity > 0.0
        {
            debug!(
                day = self.current_day,
                position,
                reorder_point = self.policy.reorder_point,
                quantity = self.policy.order_quantity,
                "placing replenishment order"
            );
            self.policy.order_quantity
        } else {
            0.0
        };

        // Evening: the order enters the pipeline (a zero keeps the pipe
        // advancing at one slot per day).
        self.pipeline.push_departure(order_placed);

        let holding_cost = self.inventory * self.config.unit_holding_cost;
        let stockout_cost = stockout_qty * self.config.stockout_cost;
        let order_cost = if order_placed > 0.0 {
            self.config.order_cost
        } else {
            0.0
        };

        self.history.push(DailyRecord {
            day: self.current_day,
            demand,
            starting_inventory,
            units_received,
            units_filled,
            stockout_qty,
            order_placed,
            ending_inventory: self.inventory,
            holding_cost,
            stockout_cost,
            order_cost,
            total_cost: holding_cost + stockout_cost + order_cost,
        });
    }

    pub fn summary(&self) -> SimulationSummary {
        let days = self.history.len();
        if days == 0 {
            return SimulationSummary {
                days: 0,
                stockout_rate: 0.0,
                overstock_rate: 0.0,
                fill_rate: 1.0,
                avg_ending_inventory: 0.0,
                orders_placed: 0,
                total_holding_cost: 0.0,
                total_stockout_cost: 0.0,
                total_order_cost: 0.0,
                total_cost: 0.0,
            };
        }

        let total_demand: f64 = self.history.iter().map(|r| r.demand).sum();
        let total_filled: f64 = self.history.iter().map(|r| r.units_filled).sum();
        let mean_daily_demand = total_demand / days as f64;
        let overstock_threshold = 2.0 * mean_daily_demand;

        let stockout_days = self.history.iter().filter(|r| r.stockout_qty > 0.0).count();
        let overstock_days = self
            .history
            .iter()
            .filter(|r| r.ending_inventory > overstock_threshold)
            .count();

        let total_holding_cost: f64 = self.history.iter().map(|r| r.holding_cost).sum();
        let total_stockout_cost: f64 = self.history.iter().map(|r| r.stockout_cost).sum();
        let total_order_cost: f64 = self.history.iter().map(|r| r.order_cost).sum();

        SimulationSummary {
            days,
            stockout_rate: stockout_days as f64 / days as f64,
            overstock_rate: overstock_days as f64 / days as f64,
            fill_rate: if total_demand > 0.0 {
                total_filled / total_demand
            } else {
                1.0
            },
            avg_ending_inventory: self.history.iter().map(|r| r.ending_inventory).sum::<f64>()
                / days as f64,
            orders_placed: self.history.iter().filter(|r| r.order_placed > 0.0).count(),
            total_holding_cost,
            total_stockout_cost,
            total_order_cost,
            total_cost: total_holding_cost + total_stockout_cost + total_order_cost,
        }
    }
}
