//! CSS lengths and the two-axis background values built from them

use std::fmt;

/// A single CSS length
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Length {
    /// Unitless zero
    #[default]
    Zero,
    /// Percentage of the reference box
    Percent(f32),
}

impl Length {
    /// Serialize as CSS text (`0`, `-200%`)
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Zero => write!(f, "0"),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Value of the `background-position` property
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BackgroundPosition {
    pub x: Length,
    pub y: Length,
}

impl BackgroundPosition {
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Horizontal percentage offset with no vertical offset
    pub const fn horizontal_percent(x: f32) -> Self {
        Self::new(Length::Percent(x), Length::Zero)
    }

    pub fn to_css(&self) -> String {
        format!("{} {}", self.x, self.y)
    }
}

/// Value of the `background-size` property
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundSize {
    pub width: Length,
    pub height: Length,
}

impl BackgroundSize {
    pub const fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    pub const fn percent(width: f32, height: f32) -> Self {
        Self::new(Length::Percent(width), Length::Percent(height))
    }

    pub fn to_css(&self) -> String {
        format!("{} {}", self.width, self.height)
    }
}
