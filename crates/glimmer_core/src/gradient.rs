//! Linear gradients rendered as CSS `linear-gradient()` backgrounds

use crate::color::Color;

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }

    fn to_css(&self) -> String {
        format!("{} {}%", self.color.to_css(), self.offset * 100.0)
    }
}

/// Linear gradient along an angle, CSS convention (`90deg` runs left to right)
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Direction in degrees
    pub angle_deg: f32,
    /// Color stops (kept sorted by offset)
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Create an empty gradient pointing along `angle_deg`
    pub fn new(angle_deg: f32) -> Self {
        Self {
            angle_deg,
            stops: Vec::new(),
        }
    }

    /// Add a stop, keeping stops ordered by offset
    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop::new(offset, color));
        self.stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        self
    }

    /// Transparent edges with a translucent peak in the middle
    ///
    /// This is the highlight band swept across an element by the glimmer
    /// animation.
    pub fn sheen(tint: Color, peak_alpha: f32, angle_deg: f32) -> Self {
        Self::new(angle_deg)
            .stop(0.0, tint.with_alpha(0.0))
            .stop(0.5, tint.with_alpha(peak_alpha))
            .stop(1.0, tint.with_alpha(0.0))
    }

    /// Serialize as a CSS `linear-gradient()` value
    pub fn to_css(&self) -> String {
        let mut parts = Vec::with_capacity(self.stops.len() + 1);
        parts.push(format!("{}deg", self.angle_deg));
        parts.extend(self.stops.iter().map(GradientStop::to_css));
        format!("linear-gradient({})", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheen_matches_reference_background() {
        let gradient = LinearGradient::sheen(Color::WHITE, 0.4, 90.0);
        assert_eq!(
            gradient.to_css(),
            "linear-gradient(90deg, rgba(255,255,255,0) 0%, rgba(255,255,255,0.4) 50%, rgba(255,255,255,0) 100%)"
        );
    }

    #[test]
    fn test_stops_are_sorted_and_clamped() {
        let gradient = LinearGradient::new(45.0)
            .stop(1.5, Color::TRANSPARENT)
            .stop(0.25, Color::WHITE);

        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.stops[0].offset, 0.25);
        assert_eq!(gradient.stops[1].offset, 1.0);
    }

    #[test]
    fn test_empty_gradient_only_has_angle() {
        assert_eq!(LinearGradient::new(0.0).to_css(), "linear-gradient(0deg)");
    }
}
