//! Render configuration loaded from YAML.

use crate::error::{Error, Result};
use crate::heatmap::ColorMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default ceiling of the probability color scale.
pub const DEFAULT_DISPLAY_MAX: f32 = 0.2;

/// Display settings shared by both renderers and the image backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Upper bound of the probability color scale; larger values saturate
    #[serde(default = "default_display_max")]
    pub display_max: f32,

    /// Color ramp
    #[serde(default)]
    pub colormap: ColorMap,

    /// Cell edge length in pixels for image output
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Font family for image output
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Annotation font size in pixels for image output
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_display_max() -> f32 {
    DEFAULT_DISPLAY_MAX
}

fn default_cell_size() -> u32 {
    48
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_font_size() -> u32 {
    16
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            display_max: default_display_max(),
            colormap: ColorMap::default(),
            cell_size: default_cell_size(),
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

impl RenderConfig {
    /// Override the probability color scale ceiling.
    pub fn with_display_max(mut self, display_max: f32) -> Self {
        self.display_max = display_max;
        self
    }

    /// Override the color ramp.
    pub fn with_colormap(mut self, colormap: ColorMap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.display_max.is_finite() || self.display_max <= 0.0 {
            return Err(Error::ConfigValue {
                field: "display_max".into(),
                message: format!("{} (must be finite and > 0.0)", self.display_max),
                suggestion: format!("Use a value like {DEFAULT_DISPLAY_MAX}"),
            });
        }
        if !(8..=512).contains(&self.cell_size) {
            return Err(Error::ConfigValue {
                field: "cell_size".into(),
                message: format!("{} (must be in 8..=512)", self.cell_size),
                suggestion: "Use a value like 48".into(),
            });
        }
        if self.font_size == 0 {
            return Err(Error::ConfigValue {
                field: "font_size".into(),
                message: "0 (must be > 0)".into(),
                suggestion: "Use a value like 16".into(),
            });
        }
        if self.font_family.trim().is_empty() {
            return Err(Error::ConfigValue {
                field: "font_family".into(),
                message: "empty font family".into(),
                suggestion: "Use \"sans-serif\"".into(),
            });
        }
        Ok(())
    }
}

/// Load and validate a YAML render configuration.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<RenderConfig> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("reading config {}", path.display()), e))?;

    let config: RenderConfig =
        serde_yaml::from_str(&yaml_content).map_err(|e| Error::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_matches_legacy_ceiling() {
        let config = RenderConfig::default();
        assert_eq!(config.display_max, 0.2);
        assert_eq!(config.colormap, ColorMap::Blues);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let file = write_yaml("display_max: 0.35\ncolormap: greens\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.display_max, 0.35);
        assert_eq!(config.colormap, ColorMap::Greens);
        assert_eq!(config.cell_size, 48);
        assert_eq!(config.font_family, "sans-serif");
    }

    #[test]
    fn test_load_empty_mapping() {
        let file = write_yaml("{}\n");
        assert_eq!(load_config(file.path()).unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_load_rejects_non_positive_display_max() {
        let file = write_yaml("display_max: 0.0\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigValue { ref field, .. } if field == "display_max"));
    }

    #[test]
    fn test_load_rejects_bad_yaml() {
        let file = write_yaml("display_max: [oops\n");
        assert!(matches!(
            load_config(file.path()),
            Err(Error::ConfigParsing { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_config("/nonexistent/render.yaml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_validate_cell_size_bounds() {
        let mut config = RenderConfig::default();
        config.cell_size = 4;
        assert!(config.validate().is_err());
        config.cell_size = 512;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = RenderConfig::default()
            .with_display_max(0.5)
            .with_colormap(ColorMap::Reds);
        assert_eq!(config.display_max, 0.5);
        assert_eq!(config.colormap, ColorMap::Reds);
    }
}
