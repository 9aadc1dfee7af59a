use std::mem;
use std::sync::Once;

use cornice_core::{Color, Rect, WindowResult};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, POINT, SIZE, WPARAM};
use windows::Win32::Graphics::Gdi::{
    AC_SRC_ALPHA, AC_SRC_OVER, BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BLENDFUNCTION,
    CreateCompatibleDC, CreateDIBSection, DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, ReleaseDC,
    SelectObject,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DestroyWindow, HWND_TOPMOST, RegisterClassW,
    SWP_NOACTIVATE, SWP_SHOWWINDOW, SetWindowPos, ULW_ALPHA, UpdateLayeredWindow, WNDCLASSW,
    WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};
use windows::core::{PCWSTR, w};

/// A translucent overlay window that displays a colored border along the
/// inner edge of its rectangle.
///
/// Uses `UpdateLayeredWindow` with per-pixel alpha so no message pump
/// is needed on the creating thread. `WS_EX_TRANSPARENT` lets mouse
/// input pass through to whatever is underneath.
pub struct Overlay {
    hwnd: HWND,
}

static REGISTER_CLASS: Once = Once::new();
const CLASS_NAME: PCWSTR = w!("CorniceOverlay");

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(overlay_wnd_proc),
            lpszClassName: CLASS_NAME,
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

unsafe extern "system" fn overlay_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

impl Overlay {
    /// Creates a new hidden overlay window.
    pub fn new() -> WindowResult<Self> {
        ensure_class_registered();

        let ex = WS_EX_LAYERED | WS_EX_TOOLWINDOW | WS_EX_TOPMOST | WS_EX_TRANSPARENT;
        // SAFETY: CreateWindowExW with a registered class and no parent
        // creates a hidden top-level popup.
        let hwnd = unsafe {
            CreateWindowExW(
                ex,
                CLASS_NAME,
                PCWSTR::null(),
                WS_POPUP,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                0,
                0,
                None,
                None,
                None,
                None,
            )?
        };

        Ok(Self { hwnd })
    }

    /// Shows the overlay covering the given rectangle, with a border of
    /// the given color and width painted along its inner edge.
    pub fn show(&self, rect: &Rect, color: Color, width: i32, opacity: f64) {
        if rect.is_empty() {
            return;
        }

        // SAFETY: SetWindowPos with a valid HWND is safe. SWP_NOACTIVATE
        // keeps focus on the target window.
        unsafe {
            let _ = SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOACTIVATE | SWP_SHOWWINDOW,
            );
        }

        self.render(rect, color.premultiplied(opacity), width);
    }

    /// Rasterizes the border bitmap and applies it via `UpdateLayeredWindow`.
    fn render(&self, rect: &Rect, pixel: u32, border_width: i32) {
        let (w, h) = (rect.width, rect.height);

        unsafe {
            let screen_dc = GetDC(None);
            let mem_dc = CreateCompatibleDC(Some(screen_dc));

            let bmi = BITMAPINFO {
                bmiHeader: BITMAPINFOHEADER {
                    biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                    biWidth: w,
                    biHeight: -h, // top-down
                    biPlanes: 1,
                    biBitCount: 32,
                    biCompression: BI_RGB.0,
                    ..Default::default()
                },
                ..Default::default()
            };

            let mut bits = std::ptr::null_mut();
            let Ok(bmp) = CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0)
            else {
                let _ = DeleteDC(mem_dc);
                let _ = ReleaseDC(None, screen_dc);
                return;
            };
            if bits.is_null() {
                let _ = DeleteObject(bmp.into());
                let _ = DeleteDC(mem_dc);
                let _ = ReleaseDC(None, screen_dc);
                return;
            }

            let old = SelectObject(mem_dc, bmp.into());

            // SAFETY: `bits` is non-null (checked above) and points to
            // `w * h` pixels allocated by CreateDIBSection.
            let buf = std::slice::from_raw_parts_mut(bits as *mut u32, (w * h) as usize);
            paint_border(buf, w, h, border_width, pixel);

            let pt_dst = POINT {
                x: rect.x,
                y: rect.y,
            };
            let size = SIZE { cx: w, cy: h };
            let pt_src = POINT::default();
            let blend = BLENDFUNCTION {
                BlendOp: AC_SRC_OVER as u8,
                // Translucency is carried per-pixel in the bitmap.
                SourceConstantAlpha: 255,
                AlphaFormat: AC_SRC_ALPHA as u8,
                ..Default::default()
            };

            let _ = UpdateLayeredWindow(
                self.hwnd,
                Some(screen_dc),
                Some(&pt_dst),
                Some(&size),
                Some(mem_dc),
                Some(&pt_src),
                COLORREF(0),
                Some(&blend),
                ULW_ALPHA,
            );

            SelectObject(mem_dc, old);
            let _ = DeleteObject(bmp.into());
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(None, screen_dc);
        }
    }
}

/// Fills the border band of a `w` x `h` pixel buffer with `pixel`,
/// leaving the interior fully transparent.
fn paint_border(buf: &mut [u32], w: i32, h: i32, border_width: i32, pixel: u32) {
    for py in 0..h {
        for px in 0..w {
            let on_border = px < border_width
                || px >= w - border_width
                || py < border_width
                || py >= h - border_width;
            buf[(py * w + px) as usize] = if on_border { pixel } else { 0 };
        }
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyWindow(self.hwnd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIXEL: u32 = 0xFF1A_1A99;

    fn rasterize(w: i32, h: i32, bw: i32) -> Vec<u32> {
        let mut buf = vec![0u32; (w * h) as usize];
        paint_border(&mut buf, w, h, bw, PIXEL);
        buf
    }

    #[test]
    fn border_band_is_painted_interior_is_clear() {
        // Act
        let buf = rasterize(6, 5, 1);

        // Assert: corners and edges carry the pixel
        assert_eq!(buf[0], PIXEL); // top-left
        assert_eq!(buf[5], PIXEL); // top-right
        assert_eq!(buf[4 * 6], PIXEL); // bottom-left
        assert_eq!(buf[4 * 6 + 5], PIXEL); // bottom-right
        assert_eq!(buf[2 * 6], PIXEL); // left edge, middle row

        // Interior is transparent
        assert_eq!(buf[6 + 1], 0);
        assert_eq!(buf[2 * 6 + 3], 0);
    }

    #[test]
    fn wide_border_respects_band_width() {
        // Act
        let buf = rasterize(8, 8, 2);

        // Assert: second ring still border, third ring interior
        assert_eq!(buf[8 + 1], PIXEL);
        assert_eq!(buf[2 * 8 + 2], 0);
    }

    #[test]
    fn border_wider_than_half_fills_everything() {
        // Act
        let buf = rasterize(4, 4, 3);

        // Assert
        assert!(buf.iter().all(|&p| p == PIXEL));
    }
}
