pub mod chart_session;
pub mod config;

pub use chart_session::*;
pub use config::*;
