//! RGBA colors and their CSS serialization

/// RGBA color with components in the 0.0-1.0 range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Serialize as a CSS `rgba()` function
    ///
    /// Channels are rounded to 8 bits; alpha is written with the shortest
    /// float form, so `0.0` becomes `0` and `0.4` stays `0.4`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            self.a
        )
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_with_alpha_to_css() {
        assert_eq!(Color::WHITE.with_alpha(0.4).to_css(), "rgba(255,255,255,0.4)");
        assert_eq!(Color::WHITE.with_alpha(0.0).to_css(), "rgba(255,255,255,0)");
    }

    #[test]
    fn test_from_rgb8_keeps_channels() {
        let color = Color::from_rgb8(12, 128, 250);
        assert_eq!(color.to_css(), "rgba(12,128,250,1)");
    }

    #[test]
    fn test_out_of_range_channels_are_clamped() {
        assert_eq!(Color::rgb(2.0, -1.0, 0.5).to_css(), "rgba(255,0,128,1)");
    }
}
