use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::log::LogConfig;

/// Top-level configuration for Cornice.
///
/// Loaded from `~/.config/cornice/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overlay appearance and lifetime settings.
    pub overlay: OverlayConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Overlay appearance and lifetime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Border width in pixels.
    pub width: i32,
    /// Hex color for the border (e.g. "#1a1a99").
    pub color: String,
    /// Overlay translucency, 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f64,
    /// Seconds before the overlay dismisses itself.
    pub duration_secs: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: 10,
            color: "#1a1a99".into(),
            opacity: 0.75,
            duration_secs: 5,
        }
    }
}

impl OverlayConfig {
    /// Parses the configured border color, falling back to the default
    /// blue when the hex string is malformed.
    pub fn color(&self) -> Color {
        Color::from_hex(&self.color).unwrap_or(Color {
            r: 0x1A,
            g: 0x1A,
            b: 0x99,
        })
    }
}

impl Config {
    /// Clamps overlay values to safe ranges.
    ///
    /// Prevents zero-width borders, invisible or out-of-range opacity,
    /// and overlays that never go away.
    pub fn validate(&mut self) {
        self.overlay.width = self.overlay.width.clamp(1, 64);
        self.overlay.opacity = self.overlay.opacity.clamp(0.05, 1.0);
        self.overlay.duration_secs = self.overlay.duration_secs.clamp(1, 600);
    }
}

/// Returns the config directory: `~/.config/cornice/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("cornice"))
}

/// Returns the config file path: `~/.config/cornice/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via [`Config::validate`].
/// Non-existent files silently return defaults; other IO errors are logged.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("cannot find the path")
        || e.contains("The system cannot find")
        || e.contains("No such file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.overlay.width, 10);
        assert_eq!(config.overlay.color, "#1a1a99");
        assert_eq!(config.overlay.duration_secs, 5);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_fields() {
        // Arrange
        let toml_str = "[overlay]\nwidth = 4\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(config.overlay.width, 4);
        assert_eq!(config.overlay.duration_secs, 5);
        assert!((config.overlay.opacity - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_clamps_extreme_values() {
        // Arrange
        let mut config = Config {
            overlay: OverlayConfig {
                width: 999,
                opacity: 7.5,
                duration_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        // Act
        config.validate();

        // Assert
        assert_eq!(config.overlay.width, 64);
        assert!((config.overlay.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.overlay.duration_secs, 1);
    }

    #[test]
    fn malformed_color_falls_back_to_default() {
        // Arrange
        let overlay = OverlayConfig {
            color: "not-a-color".into(),
            ..Default::default()
        };

        // Act
        let color = overlay.color();

        // Assert
        assert_eq!(
            color,
            Color {
                r: 0x1A,
                g: 0x1A,
                b: 0x99
            }
        );
    }

    #[test]
    fn configured_color_is_parsed() {
        // Arrange
        let overlay = OverlayConfig {
            color: "#00b4d8".into(),
            ..Default::default()
        };

        // Act / Assert
        assert_eq!(
            overlay.color(),
            Color {
                r: 0x00,
                g: 0xB4,
                b: 0xD8
            }
        );
    }
}
