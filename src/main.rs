use anyhow::{Context, Result};
use chrono::Utc;

use replenish::engine::{BatchRunner, EngineConfig};
use replenish::io::demand::{self, SyntheticForecastProvider};
use replenish::io::reporting;
use replenish::model::SupplyParameters;
use replenish::sim::{ReplenishmentSimulation, SimulationConfig};

const POLICY_CSV: &str = "policy_report.csv";
const SIMULATION_CSV: &str = "simulation_log.csv";

fn main() -> Result<()> {
    init_logging();

    println!("=== Retail Replenishment Policy Engine ===");

    // 1. SETUP CONFIGURATION
    let engine_config = EngineConfig {
        days_per_year: 365.0,
        // Lot size for SKUs whose cost inputs rule out the EOQ formula.
        fixed_batch_size: Some(250.0),
    };

    // 2. REGISTER THE CATALOG
    let skus = ["SKU-1001", "SKU-1002", "SKU-1003", "SKU-1004"];
    let locations = ["STORE-NORTH", "STORE-SOUTH"];

    let mut runner = BatchRunner::new(engine_config);
    let mut catalog = Vec::new();
    for sku in &skus {
        for location in &locations {
            runner.upsert_parameters(SupplyParameters::for_sku(*sku, *location));
            catalog.push((sku.to_string(), location.to_string()));
        }
    }

    // 3. GENERATE FORECASTS
    // One synthetic forecast per pair: 20-200 units/day, 15% volatility,
    // 2-8 day lead times.
    let period = Utc::now().date_naive();
    let mut provider =
        SyntheticForecastProvider::generate(&catalog, period, (20.0, 200.0), 0.15, (2.0, 8.0));
    println!("Generated {} forecasts for {period}", provider.snapshot().len());

    // 4. COMPUTE POLICIES
    let outcome = runner.run(&mut provider);
    println!(
        "Computed {} policies ({} failures).",
        outcome.policies.len(),
        outcome.failures.len()
    );
    for failure in &outcome.failures {
        eprintln!(
            "  {} @ {}: {}",
            failure.sku_id, failure.location_id, failure.error
        );
    }

    // 5. EXPORT THE POLICY REPORT
    match reporting::write_policy_report(POLICY_CSV, &outcome.policies) {
        Ok(_) => println!("Success! Policies written to ./{POLICY_CSV}"),
        Err(e) => eprintln!("Error writing CSV: {e}"),
    }

    // 6. SIMULATE THE FIRST SKU FOR A QUARTER
    let policy = outcome
        .policies
        .first()
        .context("no policies computed")?
        .clone();
    let forecast = provider
        .snapshot()
        .iter()
        .find(|f| f.sku_id == policy.sku_id && f.location_id == policy.location_id)
        .context("no forecast for simulated SKU")?
        .clone();

    let demand_series =
        demand::generate_normal_series(90, forecast.mean_demand, forecast.demand_std_dev);

    let sim_config = SimulationConfig {
        // Start with a full cycle of stock on the shelf.
        initial_inventory: policy.reorder_point + policy.order_quantity,
        ..SimulationConfig::default()
    };
    let mut sim = ReplenishmentSimulation::new(sim_config, policy.clone(), forecast.lead_time_days);

    println!(
        "\nSimulating {} @ {} for 90 days...",
        policy.sku_id, policy.location_id
    );
    sim.run(&demand_series);

    match reporting::write_simulation_log(SIMULATION_CSV, &sim.history) {
        Ok(_) => println!("Success! Daily log written to ./{SIMULATION_CSV}"),
        Err(e) => eprintln!("Error writing CSV: {e}"),
    }

    // 7. PRINT COST ANALYSIS
    let summary = sim.summary();
    println!("\n=== Cost Analysis ===");
    println!("Holding:   ${:.2}", summary.total_holding_cost);
    println!("Stockouts: ${:.2}", summary.total_stockout_cost);
    println!("Ordering:  ${:.2}", summary.total_order_cost);
    println!("Total:     ${:.2}", summary.total_cost);
    println!(
        "Fill rate: {:.1}% | Stockout days: {:.1}% | Orders placed: {}",
        summary.fill_rate * 100.0,
        summary.stockout_rate * 100.0,
        summary.orders_placed
    );

    println!("\nDone.");
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
