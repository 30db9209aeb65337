//! Radar Geometry - Polar layout for the wheel chart.
//!
//! Spoke `i` of `n` sits at angle `2π·i/n − π/2`, so spoke 0 always points
//! straight up and spokes proceed clockwise in screen coordinates (y down).
//! A value of 10 reaches the outer ring.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use crate::domain::foundation::ValidationError;

/// Value plotted on the outer ring.
pub const RADAR_MAX_VALUE: f64 = 10.0;

/// Default distance between the outer ring and label anchors.
pub const DEFAULT_LABEL_OFFSET: f64 = 22.0;

/// Grid rings drawn when none are configured.
pub const DEFAULT_GRID_LEVELS: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

/// A point in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal alignment for a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// Where to place the label for one spoke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub index: usize,
    pub position: Point,
    pub align: TextAlign,
}

/// A closed polygon through one vertex per spoke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPolygon {
    pub vertices: Vec<Point>,
}

impl RadarPolygon {
    /// SVG path data: `M x y L x y … Z`, two decimals.
    ///
    /// The closing `Z` returns to vertex 0. An empty polygon yields an empty path.
    pub fn to_svg_path(&self) -> String {
        let mut path = String::new();
        for (i, p) in self.vertices.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                path.push(' ');
            }
            // Writing to a String cannot fail.
            let _ = write!(path, "{} {:.2} {:.2}", cmd, p.x, p.y);
        }
        if !self.vertices.is_empty() {
            path.push_str(" Z");
        }
        path
    }

    /// SVG `points` attribute: `x,y x,y …`.
    pub fn to_svg_points(&self) -> String {
        self.vertices
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A line from the center to the outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spoke {
    pub from: Point,
    pub to: Point,
}

/// Chart dimensions. Pure: identical inputs always give identical points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarGeometry {
    pub center: Point,
    pub max_radius: f64,
    pub label_offset: f64,
}

impl RadarGeometry {
    pub fn new(center: Point, max_radius: f64, label_offset: f64) -> Self {
        Self {
            center,
            max_radius,
            label_offset,
        }
    }

    /// Geometry for a square canvas of `size`, centered, with the given radius.
    pub fn for_canvas(size: f64, max_radius: f64) -> Self {
        Self::new(Point::new(size / 2.0, size / 2.0), max_radius, DEFAULT_LABEL_OFFSET)
    }

    /// Angle of spoke `index` out of `count`, in radians.
    pub fn angle(index: usize, count: usize) -> f64 {
        if count == 0 {
            return -FRAC_PI_2;
        }
        (TAU * index as f64 / count as f64) - FRAC_PI_2
    }

    /// Radius for a value. Negative or non-finite values plot at the center.
    pub fn radius_for(&self, value: f64) -> f64 {
        if !value.is_finite() || value <= 0.0 {
            return 0.0;
        }
        (value / RADAR_MAX_VALUE) * self.max_radius
    }

    fn polar(&self, angle: f64, radius: f64) -> Point {
        Point::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }

    /// Vertex for `value` on spoke `index` of `count`.
    pub fn vertex(&self, index: usize, count: usize, value: f64) -> Point {
        self.polar(Self::angle(index, count), self.radius_for(value))
    }

    /// Polygon through one vertex per value, in order.
    pub fn polygon(&self, values: &[f64]) -> RadarPolygon {
        let n = values.len();
        RadarPolygon {
            vertices: values
                .iter()
                .enumerate()
                .map(|(i, v)| self.vertex(i, n, *v))
                .collect(),
        }
    }

    /// Grid ring at a fixed value level.
    pub fn grid_ring(&self, level: f64, count: usize) -> RadarPolygon {
        self.polygon(&vec![level; count])
    }

    /// Axis lines from the center to the outer ring.
    pub fn spokes(&self, count: usize) -> Vec<Spoke> {
        (0..count)
            .map(|i| Spoke {
                from: self.center,
                to: self.polar(Self::angle(i, count), self.max_radius),
            })
            .collect()
    }

    /// Label anchors just outside the outer ring.
    pub fn label_anchors(&self, count: usize) -> Vec<LabelAnchor> {
        let radius = self.max_radius + self.label_offset;
        (0..count)
            .map(|i| {
                let angle = Self::angle(i, count);
                let cos = angle.cos();
                let align = if cos.abs() < 1e-6 {
                    TextAlign::Middle
                } else if cos > 0.0 {
                    TextAlign::Start
                } else {
                    TextAlign::End
                };
                LabelAnchor {
                    index: i,
                    position: self.polar(angle, radius),
                    align,
                }
            })
            .collect()
    }
}

/// Everything needed to draw one wheel: grid, spokes, labels and up to
/// two overlaid series sharing the same angular layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarChart {
    pub geometry: RadarGeometry,
    pub grid: Vec<RadarPolygon>,
    pub spokes: Vec<Spoke>,
    pub labels: Vec<LabelAnchor>,
    pub current: RadarPolygon,
    pub previous: Option<RadarPolygon>,
}

impl RadarChart {
    /// Builds a chart for `current` and an optional `previous` overlay.
    ///
    /// Both series must have the same length.
    pub fn build(
        geometry: RadarGeometry,
        grid_levels: &[f64],
        current: &[f64],
        previous: Option<&[f64]>,
    ) -> Result<Self, ValidationError> {
        let n = current.len();
        if let Some(prev) = previous {
            if prev.len() != n {
                return Err(ValidationError::invalid_format(
                    "previous_series",
                    format!("expected {} values, got {}", n, prev.len()),
                ));
            }
        }

        Ok(Self {
            geometry,
            grid: grid_levels.iter().map(|l| geometry.grid_ring(*l, n)).collect(),
            spokes: geometry.spokes(n),
            labels: geometry.label_anchors(n),
            current: geometry.polygon(current),
            previous: previous.map(|p| geometry.polygon(p)),
        })
    }

    pub fn has_overlay(&self) -> bool {
        self.previous.is_some()
    }
}
