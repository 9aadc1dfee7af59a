/// Ctrl+C handling via the console control handler.
pub mod ctrl_c;

/// Process DPI awareness.
pub mod dpi;

/// DWM frame queries (drop-shadow compensation).
pub mod frame;

/// Absolute screen geometry resolution.
pub mod geometry;

/// The highlight run: resolve geometry, show the overlay, wait, dismiss.
pub mod highlight;

/// The translucent border overlay window.
pub mod overlay;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use highlight::{Dismissal, run};
pub use window::Window;
