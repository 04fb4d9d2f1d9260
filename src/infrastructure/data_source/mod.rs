pub mod json;
pub mod simulated;

pub use json::{JsonSource, parse_series_json};
pub use simulated::{SimulatedSource, SimulationConfig};
