pub mod axis;
pub mod config;

pub use axis::{axes_equal, reverse, AxisState, ColorEntry, GridState};
pub use config::{AppConfig, ConfigError};
