//! Grid configuration, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::geometry::{Coord, Size};
use crate::render::RenderSettings;

pub const DEFAULT_LOG_TARGET: &str = "city_grid::grid";

/// Which edges of the grid an insert is checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Reject only `x >= width` or `y >= height`. Negative coordinates are stored.
    #[default]
    UpperOnly,
    /// Also reject negative coordinates.
    Strict,
}

impl BoundsPolicy {
    pub fn admits(self, size: Size, coord: Coord) -> bool {
        match self {
            BoundsPolicy::UpperOnly => size.contains_upper(coord),
            BoundsPolicy::Strict => size.contains(coord),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Size,
    #[serde(default)]
    pub bounds: BoundsPolicy,
    #[serde(default)]
    pub render: RenderSettings,
    /// Collect insert/eviction/render counters.
    #[serde(default)]
    pub metrics: bool,
    #[serde(default = "default_log_target")]
    pub log_target: String,
}

fn default_log_target() -> String {
    DEFAULT_LOG_TARGET.to_string()
}

impl GridConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            bounds: BoundsPolicy::default(),
            render: RenderSettings::default(),
            metrics: false,
            log_target: default_log_target(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_target.trim().is_empty() {
            return Err(GridError::Config("log_target must not be empty".into()));
        }
        if let Some(fill) = self.render.fill {
            if fill.is_control() {
                return Err(GridError::Config(format!(
                    "fill must be a printable character, got {fill:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_config_fills_in_defaults() {
        let config = GridConfig::from_json_str(r#"{"size":{"width":3,"height":2}}"#).unwrap();
        assert_eq!(config, GridConfig::new(3, 2));
    }

    #[test]
    fn json_config_reads_policy_and_render() {
        let config = GridConfig::from_json_str(
            r#"{
                "size": {"width": 4, "height": 4},
                "bounds": "strict",
                "render": {"line_separator": "|", "fill": "."},
                "metrics": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.bounds, BoundsPolicy::Strict);
        assert_eq!(config.render.line_separator, "|");
        assert_eq!(config.render.fill, Some('.'));
        assert!(config.metrics);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let missing_size = GridConfig::from_json_str("{}");
        assert!(matches!(missing_size, Err(GridError::Decode(_))));

        let control_fill = GridConfig::from_json_str(
            r#"{"size":{"width":1,"height":1},"render":{"fill":"\n"}}"#,
        );
        assert!(matches!(control_fill, Err(GridError::Config(_))));

        let blank_target =
            GridConfig::from_json_str(r#"{"size":{"width":1,"height":1},"log_target":" "}"#);
        assert!(matches!(blank_target, Err(GridError::Config(_))));
    }

    #[test]
    fn policies_differ_only_on_negative_coords() {
        let size = Size::new(2, 2);
        assert!(BoundsPolicy::UpperOnly.admits(size, Coord::new(-1, -1)));
        assert!(!BoundsPolicy::Strict.admits(size, Coord::new(-1, -1)));
        assert!(!BoundsPolicy::UpperOnly.admits(size, Coord::new(2, 0)));
        assert!(!BoundsPolicy::Strict.admits(size, Coord::new(2, 0)));
    }
}
