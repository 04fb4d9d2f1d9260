//! Chart interaction: events, plot geometry and the zoom controller.

pub mod controller;
pub mod events;
pub mod geometry;

pub use controller::*;
pub use events::*;
pub use geometry::*;
