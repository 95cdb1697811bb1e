//! Canvas layout configuration.
//!
//! All geometry constants live here so that a host can load them from JSON
//! instead of relying on the built-in defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Sizes and bounds used for block placement and link anchoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width of a rendered block; output anchors sit on its right edge.
    pub node_width: f64,
    /// Vertical distance between consecutive port rows.
    pub port_row_spacing: f64,
    /// Offset from a block's top edge to its first port row.
    pub port_base_offset: f64,
    /// Minimum coordinate on both axes.
    pub padding: f64,
    pub max_x: f64,
    pub max_y: f64,
    /// Distance between cascaded default placements.
    pub cascade_step: f64,
    /// Number of rows the default placement cycles through.
    pub cascade_rows: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            node_width: 240.0,
            port_row_spacing: 32.0,
            port_base_offset: 74.0,
            padding: 18.0,
            max_x: 1200.0,
            max_y: 720.0,
            cascade_step: 120.0,
            cascade_rows: 3,
        }
    }
}

impl CanvasConfig {
    /// Load and validate a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CanvasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("node_width", self.node_width),
            ("port_row_spacing", self.port_row_spacing),
            ("port_base_offset", self.port_base_offset),
            ("padding", self.padding),
            ("max_x", self.max_x),
            ("max_y", self.max_y),
            ("cascade_step", self.cascade_step),
        ];
        if let Some((field, _)) = finite.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Invalid {
                field,
                message: "must be a finite number".to_string(),
            });
        }

        for (field, value) in [
            ("node_width", self.node_width),
            ("port_row_spacing", self.port_row_spacing),
            ("cascade_step", self.cascade_step),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("must be positive, got {}", value),
                });
            }
        }

        if self.max_x < self.padding {
            return Err(ConfigError::Invalid {
                field: "max_x",
                message: format!("must be at least padding ({})", self.padding),
            });
        }
        if self.max_y < self.padding {
            return Err(ConfigError::Invalid {
                field: "max_y",
                message: format!("must be at least padding ({})", self.padding),
            });
        }
        if self.cascade_rows == 0 {
            return Err(ConfigError::Invalid {
                field: "cascade_rows",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Clamp a point into `[padding, max_x] x [padding, max_y]`.
    ///
    /// Total for unvalidated configs: a NaN bound is skipped, and when
    /// `padding` exceeds a maximum the maximum wins.
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (
            clamp_axis(x, self.padding, self.max_x),
            clamp_axis(y, self.padding, self.max_y),
        )
    }
}

// `f64::max`/`min` return the other operand when one side is NaN.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
