pub mod color;
pub mod config;
pub mod log;
pub mod rect;
pub mod window;

pub use color::Color;
pub use config::Config;
pub use rect::Rect;
pub use window::{Window, WindowResult};
