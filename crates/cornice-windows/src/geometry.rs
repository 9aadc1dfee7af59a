use cornice_core::{Rect, WindowResult};

use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GA_PARENT, GetAncestor, GetDesktopWindow, GetWindowRect, MapWindowPoints,
};

/// Upper bound on the ancestor walk, in case of a malformed window tree.
const MAX_ANCESTOR_DEPTH: usize = 64;

/// Resolves the absolute screen rectangle of a window.
///
/// The size comes from `GetWindowRect`; a failure there (including an
/// invalid handle) is a hard error. Child windows are positioned relative
/// to their parent's client area, so the position is computed by walking
/// the ancestor chain up to the desktop window and summing each level's
/// client-origin offset. The walk is best-effort: it stops silently at
/// the first ancestor that cannot be queried and uses whatever has been
/// accumulated.
pub fn resolve_screen_rect(hwnd: HWND) -> WindowResult<Rect> {
    let mut bounds = RECT::default();
    // SAFETY: GetWindowRect fills the RECT for any valid HWND and
    // returns an error for invalid handles.
    unsafe { GetWindowRect(hwnd, &mut bounds)? };

    let width = bounds.right - bounds.left;
    let height = bounds.bottom - bounds.top;

    // SAFETY: GetDesktopWindow and GetAncestor are simple queries.
    let desktop = unsafe { GetDesktopWindow() };
    let parent = unsafe { GetAncestor(hwnd, GA_PARENT) };

    if parent.is_invalid() || parent == desktop {
        // Top-level window: GetWindowRect already gave screen coordinates.
        return Ok(Rect::new(bounds.left, bounds.top, width, height));
    }

    // Child window: start from the position within the parent's client
    // area, then accumulate the ancestors' client-origin offsets.
    let mut origin = POINT {
        x: bounds.left,
        y: bounds.top,
    };
    // SAFETY: MapWindowPoints with a null source maps screen coordinates
    // into the parent's client space.
    unsafe { MapWindowPoints(None, Some(parent), std::slice::from_mut(&mut origin)) };

    let base = Rect::new(origin.x, origin.y, width, height);
    Ok(accumulate(base, ancestor_offsets(parent, desktop)))
}

/// Collects the client-origin offset of each ancestor within its own
/// parent, from `start` up to (not including) the desktop window.
fn ancestor_offsets(start: HWND, desktop: HWND) -> Vec<(i32, i32)> {
    let mut offsets = Vec::new();
    let mut current = start;

    for _ in 0..MAX_ANCESTOR_DEPTH {
        if current == desktop {
            break;
        }
        // SAFETY: GetAncestor is a simple query; a null result ends the walk.
        let parent = unsafe { GetAncestor(current, GA_PARENT) };
        if parent.is_invalid() {
            break;
        }

        let mut origin = POINT::default();
        // SAFETY: maps (0, 0) in current's client space into the parent's
        // client space, which is exactly the relative offset.
        unsafe { MapWindowPoints(Some(current), Some(parent), std::slice::from_mut(&mut origin)) };

        offsets.push((origin.x, origin.y));
        current = parent;
    }

    offsets
}

/// Sums a chain of parent offsets onto a base rectangle.
///
/// Offsets telescope: each entry is a window's origin within its parent,
/// so the fold yields the position in the outermost coordinate space.
fn accumulate(base: Rect, offsets: Vec<(i32, i32)>) -> Rect {
    offsets
        .into_iter()
        .fold(base, |rect, (dx, dy)| rect.translated(dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chain_keeps_base_position() {
        // Arrange
        let base = Rect::new(12, 34, 640, 480);

        // Act
        let rect = accumulate(base, Vec::new());

        // Assert
        assert_eq!(rect, base);
    }

    #[test]
    fn offsets_sum_into_absolute_position() {
        // Arrange: a window at (10, 20) inside three nested ancestors
        let base = Rect::new(10, 20, 300, 200);
        let offsets = vec![(100, 50), (7, 3), (200, 0)];

        // Act
        let rect = accumulate(base, offsets);

        // Assert: position is the arithmetic sum, size untouched
        assert_eq!(rect, Rect::new(317, 73, 300, 200));
    }

    #[test]
    fn negative_offsets_are_summed_too() {
        // Arrange: ancestors on a monitor left of the primary
        let base = Rect::new(5, 5, 100, 100);
        let offsets = vec![(-1920, 0), (0, -8)];

        // Act
        let rect = accumulate(base, offsets);

        // Assert
        assert_eq!(rect, Rect::new(-1915, -3, 100, 100));
    }
}
