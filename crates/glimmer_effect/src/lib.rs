//! Glimmer shine sweep effect
//!
//! Decorates a style target with a looping highlight: a translucent gradient
//! twice the element's width whose background position is animated across
//! the element by a generated `@keyframes` rule.
//!
//! The registry the rule goes into and the source of animation names are
//! both passed in, so the effect never touches global state.
//!
//! # Example
//!
//! ```rust
//! use glimmer_core::{shared_registry, Element, Stylesheet};
//! use glimmer_effect::{glimmer, GlimmerConfig};
//!
//! let registry = shared_registry(Stylesheet::new());
//! let button = Element::new("button").into_shared();
//!
//! let mut effect = glimmer()
//!     .config(GlimmerConfig { peak_alpha: 0.25, ..Default::default() })
//!     .duration_ms(1200)
//!     .apply(&button, registry)?;
//!
//! // ...later
//! effect.destroy();
//! # Ok::<(), glimmer_effect::GlimmerError>(())
//! ```

mod config;
mod effect;
mod error;
mod id;

pub use config::{GlimmerConfig, DEFAULT_DURATION_MS};
pub use effect::{GlimmerBuilder, GlimmerEffect, ANIMATION_PREFIX};
pub use error::{ConfigError, GlimmerError, Result};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};

/// Start building a glimmer effect with default settings
pub fn glimmer() -> GlimmerBuilder {
    GlimmerBuilder::new()
}
