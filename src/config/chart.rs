//! Radar chart configuration

use serde::Deserialize;

use crate::domain::analysis::{
    Point, RadarGeometry, DEFAULT_GRID_LEVELS, DEFAULT_LABEL_OFFSET, RADAR_MAX_VALUE,
};

use super::error::ValidationError;

/// Layout of the wheel chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    /// Side of the square canvas; the wheel is centered in it
    #[serde(default = "default_size")]
    pub size: f64,

    /// Radius of the outer ring (value 10)
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,

    /// Distance from the outer ring to the label anchors
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,

    /// Value levels at which grid rings are drawn
    #[serde(default = "default_grid_levels")]
    pub grid_levels: Vec<f64>,
}

impl ChartConfig {
    /// Geometry centered on the canvas
    pub fn geometry(&self) -> RadarGeometry {
        let half = self.size / 2.0;
        RadarGeometry::new(Point::new(half, half), self.max_radius, self.label_offset)
    }

    /// Validate chart configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.size > 0.0) {
            return Err(ValidationError::InvalidSize(self.size));
        }
        if !(self.max_radius > 0.0) {
            return Err(ValidationError::InvalidRadius(self.max_radius));
        }
        if !(self.label_offset >= 0.0) {
            return Err(ValidationError::InvalidLabelOffset(self.label_offset));
        }
        if 2.0 * (self.max_radius + self.label_offset) > self.size {
            return Err(ValidationError::ChartTooSmall {
                size: self.size,
                radius: self.max_radius,
                offset: self.label_offset,
            });
        }
        if let Some(level) = self
            .grid_levels
            .iter()
            .find(|l| !(**l > 0.0 && **l <= RADAR_MAX_VALUE))
        {
            return Err(ValidationError::InvalidGridLevel(*level));
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            max_radius: default_max_radius(),
            label_offset: default_label_offset(),
            grid_levels: default_grid_levels(),
        }
    }
}

fn default_size() -> f64 {
    400.0
}

fn default_max_radius() -> f64 {
    150.0
}

fn default_label_offset() -> f64 {
    DEFAULT_LABEL_OFFSET
}

fn default_grid_levels() -> Vec<f64> {
    DEFAULT_GRID_LEVELS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.size, 400.0);
        assert_eq!(config.max_radius, 150.0);
        assert_eq!(config.label_offset, 22.0);
        assert_eq!(config.grid_levels, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_geometry_is_centered() {
        let geometry = ChartConfig::default().geometry();
        assert_eq!(geometry.center, Point::new(200.0, 200.0));
        assert_eq!(geometry.max_radius, 150.0);
        assert_eq!(geometry.label_offset, 22.0);
    }

    #[test]
    fn test_validation_rejects_non_positive_or_nan_size() {
        let config = ChartConfig {
            size: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSize(0.0)));

        let config = ChartConfig {
            size: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSize(size)) if size.is_nan()
        ));
    }

    #[test]
    fn test_validation_rejects_non_positive_radius() {
        let config = ChartConfig {
            max_radius: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidRadius(0.0)));

        let config = ChartConfig {
            max_radius: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_offset() {
        let config = ChartConfig {
            label_offset: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidLabelOffset(-1.0)));
    }

    #[test]
    fn test_validation_rejects_labels_off_canvas() {
        let config = ChartConfig {
            size: 300.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ChartTooSmall { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_grid_levels_out_of_range() {
        for level in [0.0, -2.0, 10.5] {
            let config = ChartConfig {
                grid_levels: vec![2.0, level],
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidGridLevel(level)));
        }
    }
}
