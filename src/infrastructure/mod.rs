pub mod data_source;
#[cfg(feature = "render")]
pub mod rendering;
pub mod services;
