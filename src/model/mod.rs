//! Data model: forecast inputs, supply parameters, policy outputs.

pub mod forecast;
pub mod params;
pub mod policy;

pub use forecast::DemandForecast;
pub use params::SupplyParameters;
pub use policy::{InventoryPolicy, OrderQuantityMethod};
