//! Formatting utilities

use glam::DVec3;

/// Format an angle in degrees
pub fn format_degrees(value: f64) -> String {
    format!("{value:.1}°")
}

/// Format an elevation or distance with fixed precision
pub fn format_length(value: f64) -> String {
    format!("{value:.4}")
}

/// Format a planar position, dropping z
pub fn format_planar(point: DVec3) -> String {
    format!("({:.3}, {:.3})", point.x, point.y)
}

/// Format a 3D point
pub fn format_point(point: DVec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", point.x, point.y, point.z)
}
