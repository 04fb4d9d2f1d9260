//! Time series aggregate: the master series, the visible window and the
//! store that derives one from the other.

pub mod entities;
pub mod repositories;
pub mod store;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use store::*;
pub use value_objects::*;
