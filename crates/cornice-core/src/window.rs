use crate::Rect;

/// A boxed error type for window operations.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Platform-agnostic window trait.
///
/// The platform crate (e.g. `cornice-windows`) provides the implementation.
pub trait Window {
    /// Returns the window title.
    fn title(&self) -> WindowResult<String>;

    /// Returns the window's absolute screen rectangle.
    fn rect(&self) -> WindowResult<Rect>;

    /// Returns whether the window is currently visible.
    fn is_visible(&self) -> bool;
}
