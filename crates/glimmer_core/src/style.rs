//! Element styling
//!
//! Provides `ElementStyle` - an ordered map of the visual properties an
//! effect may write onto an element, plus `StyleProperty`, the closed set of
//! property names those writes are allowed to touch.
//!
//! An empty string is a meaningful value: it resets the property so that the
//! element falls back to whatever styling it gets from other sources.
//!
//! # Example
//!
//! ```
//! use glimmer_core::{ElementStyle, StyleProperty};
//!
//! let mut style = ElementStyle::new()
//!     .with(StyleProperty::Position, "relative")
//!     .with(StyleProperty::Overflow, "hidden");
//!
//! style.clear_property(StyleProperty::Overflow);
//! assert_eq!(style.get(StyleProperty::Overflow), Some(""));
//! assert_eq!(style.to_css_declarations(), "position: relative;");
//! ```

use std::fmt;

use indexmap::IndexMap;

/// Visual properties that can be assigned on a style target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Position,
    Overflow,
    Background,
    BackgroundSize,
    BackgroundPosition,
    Animation,
}

impl StyleProperty {
    /// The CSS property name
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::Position => "position",
            StyleProperty::Overflow => "overflow",
            StyleProperty::Background => "background",
            StyleProperty::BackgroundSize => "background-size",
            StyleProperty::BackgroundPosition => "background-position",
            StyleProperty::Animation => "animation",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Inline style properties of an element
///
/// Insertion order is preserved so rendered declarations are stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStyle {
    properties: IndexMap<StyleProperty, String>,
}

impl ElementStyle {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ElementStyle::set`]
    pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Assign a property, replacing any previous value
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        self.properties.insert(property, value.into());
    }

    /// Current value of a property, `None` if it was never assigned
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.properties.get(&property).map(String::as_str)
    }

    /// Reset a property to the empty string
    pub fn clear_property(&mut self, property: StyleProperty) {
        self.set(property, String::new());
    }

    /// Whether the property holds a non-empty value
    pub fn is_set(&self, property: StyleProperty) -> bool {
        self.get(property).is_some_and(|value| !value.is_empty())
    }

    /// Iterate over assigned properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.properties
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    /// Number of assigned properties, including cleared ones
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render as `name: value;` declarations, skipping empty values
    pub fn to_css_declarations(&self) -> String {
        self.iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(property, value)| format!("{}: {};", property.css_name(), value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut style = ElementStyle::new();
        style.set(StyleProperty::Animation, "pulse 1s");
        assert_eq!(style.get(StyleProperty::Animation), Some("pulse 1s"));
        assert!(style.is_set(StyleProperty::Animation));
        assert_eq!(style.get(StyleProperty::Background), None);
    }

    #[test]
    fn test_clear_property_keeps_entry_but_unsets() {
        let mut style = ElementStyle::new().with(StyleProperty::Background, "red");
        style.clear_property(StyleProperty::Background);

        assert_eq!(style.len(), 1);
        assert_eq!(style.get(StyleProperty::Background), Some(""));
        assert!(!style.is_set(StyleProperty::Background));
    }

    #[test]
    fn test_declarations_keep_insertion_order() {
        let style = ElementStyle::new()
            .with(StyleProperty::Overflow, "hidden")
            .with(StyleProperty::Position, "relative")
            .with(StyleProperty::Background, "");

        assert_eq!(
            style.to_css_declarations(),
            "overflow: hidden; position: relative;"
        );
    }
}
