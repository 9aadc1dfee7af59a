use std::sync::mpsc;
use std::time::Duration;

use cornice_core::{Config, Window as _, WindowResult, log_debug, log_info, log_warn};

use crate::ctrl_c;
use crate::dpi;
use crate::frame;
use crate::overlay::Overlay;
use crate::window::Window;

/// Why the overlay went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The configured duration elapsed.
    TimedOut,
    /// Ctrl+C or Ctrl+Break arrived.
    Interrupted,
}

/// Draws the border overlay around the given window and blocks until the
/// configured duration elapses or an interrupt arrives.
pub fn run(handle: usize, config: &Config) -> WindowResult<Dismissal> {
    dpi::enable_dpi_awareness();

    let window = Window::from_raw(handle);
    if !window.is_valid() {
        return Err(format!("no window with handle 0x{handle:X}").into());
    }

    log_info!(
        "highlighting 0x{:X} \"{}\"",
        handle,
        window.title().unwrap_or_default()
    );
    if !window.is_visible() {
        log_warn!("window 0x{handle:X} is not visible");
    }

    let rect = window.rect()?;
    let rect = frame::shadow_offset(window.hwnd()).shrink(rect);
    if rect.is_empty() {
        return Err(format!("window 0x{handle:X} has an empty rectangle").into());
    }
    log_debug!(
        "resolved rect ({}, {}) {}x{}",
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );

    let overlay = Overlay::new()?;
    overlay.show(
        &rect,
        config.overlay.color(),
        config.overlay.width,
        config.overlay.opacity,
    );

    // The layered overlay needs no message pump, so the main thread can
    // simply block until the timeout or an interrupt.
    let (tx, rx) = mpsc::channel();
    ctrl_c::set_handler(tx);

    let dismissal = match rx.recv_timeout(Duration::from_secs(config.overlay.duration_secs)) {
        Ok(()) => Dismissal::Interrupted,
        Err(_) => Dismissal::TimedOut,
    };

    log_info!("overlay dismissed ({dismissal:?})");
    drop(overlay);
    Ok(dismissal)
}
