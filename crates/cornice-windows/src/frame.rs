use std::mem;

use cornice_core::Rect;
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::GetWindowRect;

/// The invisible drop-shadow border widths around a window.
///
/// On Windows 10/11, top-level windows have invisible drop-shadow borders
/// that `GetWindowRect` includes but are not visually part of the window.
/// Typical values are ~7px left/right/bottom and 0px top.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShadowOffset {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ShadowOffset {
    /// Shrinks a rectangle by the shadow widths so an overlay drawn on it
    /// hugs the visible frame instead of the shadow.
    pub fn shrink(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x + self.left,
            rect.y + self.top,
            rect.width - self.left - self.right,
            rect.height - self.top - self.bottom,
        )
    }
}

/// Computes the invisible border widths by comparing `GetWindowRect`
/// (includes shadows) with `DWMWA_EXTENDED_FRAME_BOUNDS` (visible area).
///
/// Returns zero offsets when DWM is unavailable or the window has no
/// extended frame (e.g. child windows).
pub fn shadow_offset(hwnd: HWND) -> ShadowOffset {
    let mut window_rect = RECT::default();
    // SAFETY: GetWindowRect fills the RECT for any valid HWND.
    if unsafe { GetWindowRect(hwnd, &mut window_rect) }.is_err() {
        return ShadowOffset::default();
    }

    let mut frame_rect = RECT::default();
    // SAFETY: DwmGetWindowAttribute writes a RECT when queried for
    // DWMWA_EXTENDED_FRAME_BOUNDS; we pass the matching buffer size.
    let result = unsafe {
        DwmGetWindowAttribute(
            hwnd,
            DWMWA_EXTENDED_FRAME_BOUNDS,
            &mut frame_rect as *mut RECT as *mut _,
            mem::size_of::<RECT>() as u32,
        )
    };
    if result.is_err() {
        return ShadowOffset::default();
    }

    ShadowOffset {
        left: frame_rect.left - window_rect.left,
        top: frame_rect.top - window_rect.top,
        right: window_rect.right - frame_rect.right,
        bottom: window_rect.bottom - frame_rect.bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_removes_shadow_widths() {
        // Arrange
        let offset = ShadowOffset {
            left: 7,
            top: 0,
            right: 7,
            bottom: 7,
        };
        let rect = Rect::new(100, 100, 814, 607);

        // Act
        let visible = offset.shrink(rect);

        // Assert
        assert_eq!(visible, Rect::new(107, 100, 800, 600));
    }

    #[test]
    fn zero_offset_leaves_rect_unchanged() {
        // Arrange
        let rect = Rect::new(0, 0, 640, 480);

        // Act / Assert
        assert_eq!(ShadowOffset::default().shrink(rect), rect);
    }
}
