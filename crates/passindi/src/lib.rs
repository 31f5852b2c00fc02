pub mod anim;
pub mod canvas;
pub mod color;
pub mod config;
pub mod indicator;
pub mod ipc;
pub mod layout;
pub mod slot;
pub mod units;

pub use canvas::Canvas;
pub use config::{ConfigError, IndicatorConfig};
pub use indicator::PasswordIndicator;
pub use layout::{MeasureSpec, Padding};
