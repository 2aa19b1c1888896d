//! Glimmer Core
//!
//! Style primitives shared by glimmer effects:
//!
//! - **Colors and gradients**: `Color`, `LinearGradient` with CSS serialization
//! - **Element styles**: `ElementStyle`, an ordered map of `StyleProperty` values
//! - **Keyframes**: `CssKeyframes` rules and the `CssAnimation` shorthand
//! - **Style registry**: the `StyleRegistry` contract and the in-memory `Stylesheet`
//! - **Style targets**: the `StyleTarget` capability and dynamically typed `HostValue`s
//!
//! # Example
//!
//! ```rust
//! use glimmer_core::{CssKeyframes, Stylesheet, StyleRegistry};
//!
//! let mut sheet = Stylesheet::new();
//! let id = sheet.insert_rule(CssKeyframes::new("pulse").into());
//! assert!(sheet.contains_keyframes("pulse"));
//!
//! sheet.remove_rule(id);
//! assert!(sheet.is_empty());
//! ```

pub mod color;
pub mod error;
pub mod gradient;
pub mod keyframes;
pub mod registry;
pub mod style;
pub mod target;
pub mod units;

pub use color::Color;
pub use error::ParseError;
pub use gradient::{GradientStop, LinearGradient};
pub use keyframes::{AnimationTiming, CssAnimation, CssKeyframe, CssKeyframes, IterationCount};
pub use registry::{shared_registry, RuleId, SharedStyleRegistry, StyleRegistry, StyleRule, Stylesheet};
pub use style::{ElementStyle, StyleProperty};
pub use target::{Element, HostValue, SharedStyleTarget, StyleTarget};
pub use units::{BackgroundPosition, BackgroundSize, Length};
