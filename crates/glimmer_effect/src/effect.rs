//! The glimmer effect
//!
//! Applying an effect registers a two-stop `@keyframes` rule that slides the
//! background from `-200% 0` to `200% 0`, then points the element at it with
//! a translucent sheen gradient twice the element's width:
//!
//! ```text
//! position: relative;
//! overflow: hidden;
//! background: linear-gradient(90deg, rgba(255,255,255,0) 0%, rgba(255,255,255,0.4) 50%, rgba(255,255,255,0) 100%);
//! background-size: 200% 100%;
//! animation: glimmer_<id> 1500ms infinite;
//! ```
//!
//! An effect is Active until `destroy` is called; there is no cleanup on
//! drop, so dropping an Active effect leaves its rule and styles in place.
//!
//! # Example
//!
//! ```
//! use glimmer_core::{shared_registry, Element, StyleProperty, StyleRegistry, StyleTarget, Stylesheet};
//! use glimmer_effect::GlimmerEffect;
//!
//! let registry = shared_registry(Stylesheet::new());
//! let banner = Element::new("div").id("banner").into_shared();
//!
//! let mut glimmer = GlimmerEffect::with_duration(&banner, registry.clone(), 2000)?;
//! assert_eq!(registry.borrow().rule_count(), 1);
//!
//! glimmer.destroy();
//! assert_eq!(registry.borrow().rule_count(), 0);
//! assert_eq!(banner.borrow().style_value(StyleProperty::Animation), Some(""));
//! # Ok::<(), glimmer_effect::GlimmerError>(())
//! ```

use std::path::Path;

use glimmer_core::{
    CssAnimation, CssKeyframes, ElementStyle, HostValue, RuleId, SharedStyleRegistry,
    SharedStyleTarget, StyleProperty, StyleRegistry,
};
use tracing::{debug, warn};

use crate::config::GlimmerConfig;
use crate::error::{GlimmerError, Result};
use crate::id::{IdGenerator, RandomIdGenerator};

/// Prefix of every generated animation name
pub const ANIMATION_PREFIX: &str = "glimmer_";

/// A looping shine sweep bound to one element
pub struct GlimmerEffect<R: StyleRegistry> {
    target: SharedStyleTarget,
    registry: SharedStyleRegistry<R>,
    duration_ms: i64,
    animation_name: String,
    /// Present exactly while the effect is Active
    rule: Option<RuleId>,
}

impl<R: StyleRegistry> GlimmerEffect<R> {
    /// Apply the effect with the default cycle of `DEFAULT_DURATION_MS`
    pub fn new(target: impl Into<HostValue>, registry: SharedStyleRegistry<R>) -> Result<Self> {
        GlimmerBuilder::new().apply(target, registry)
    }

    /// Apply the effect with a custom cycle duration
    ///
    /// The duration is not validated; zero or negative values produce a
    /// static or degenerate animation rather than an error.
    pub fn with_duration(
        target: impl Into<HostValue>,
        registry: SharedStyleRegistry<R>,
        duration_ms: i64,
    ) -> Result<Self> {
        GlimmerBuilder::new()
            .duration_ms(duration_ms)
            .apply(target, registry)
    }

    /// Stop and remove the effect
    ///
    /// Removes the injected rule, then resets the element's `animation`,
    /// `background` and `background-size` to empty. Earlier values of those
    /// properties are not restored; `position` and `overflow` stay as
    /// applied. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if let Some(rule) = self.rule.take() {
            self.registry.borrow_mut().remove_rule(rule);
            debug!(animation = self.animation_name.as_str(), "glimmer removed");
        }

        let mut target = self.target.borrow_mut();
        target.clear_style(StyleProperty::Animation);
        target.clear_style(StyleProperty::Background);
        target.clear_style(StyleProperty::BackgroundSize);
    }

    /// Whether `destroy` has not been called yet
    pub fn is_active(&self) -> bool {
        self.rule.is_some()
    }

    /// Generated `@keyframes` name, `glimmer_<id>`
    pub fn animation_name(&self) -> &str {
        &self.animation_name
    }

    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    /// Handle of the injected rule while Active
    pub fn rule_id(&self) -> Option<RuleId> {
        self.rule
    }

    pub fn target(&self) -> &SharedStyleTarget {
        &self.target
    }

    pub fn registry(&self) -> &SharedStyleRegistry<R> {
        &self.registry
    }
}

impl<R: StyleRegistry> std::fmt::Debug for GlimmerEffect<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlimmerEffect")
            .field("animation_name", &self.animation_name)
            .field("duration_ms", &self.duration_ms)
            .field("rule", &self.rule)
            .finish()
    }
}

/// Builder for a `GlimmerEffect`
pub struct GlimmerBuilder {
    config: GlimmerConfig,
    ids: Box<dyn IdGenerator>,
}

impl std::fmt::Debug for GlimmerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlimmerBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for GlimmerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GlimmerBuilder {
    pub fn new() -> Self {
        Self {
            config: GlimmerConfig::default(),
            ids: Box::new(RandomIdGenerator),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: GlimmerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the configuration with one loaded from a TOML file
    pub fn config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        Ok(self.config(GlimmerConfig::load(path)?))
    }

    /// Set the cycle duration (default: 1500ms)
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.config.duration_ms = duration_ms;
        self
    }

    /// Use a custom source for animation-name suffixes
    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Apply the effect to `target`
    ///
    /// Fails with `InvalidArgument` before touching the registry when the
    /// target cannot take styles, and with `TargetBusy` when the element is
    /// already borrowed.
    pub fn apply<R: StyleRegistry>(
        mut self,
        target: impl Into<HostValue>,
        registry: SharedStyleRegistry<R>,
    ) -> Result<GlimmerEffect<R>> {
        let value = target.into();
        let target = value
            .as_style_target()
            .ok_or(GlimmerError::InvalidArgument {
                found: value.type_name(),
            })?;

        // Held from before the rule goes in, so a busy element never leaves
        // an orphaned rule behind
        let mut element = target
            .try_borrow_mut()
            .map_err(|_| GlimmerError::TargetBusy)?;

        let config = &self.config;
        if config.duration_ms <= 0 {
            warn!(
                duration_ms = config.duration_ms,
                "glimmer duration is not positive, animation will not sweep"
            );
        }

        let animation_name = format!("{}{}", ANIMATION_PREFIX, self.ids.next_id());

        let (from, to) = config.sweep();
        let keyframes = CssKeyframes::new(animation_name.clone())
            .keyframe(
                0.0,
                ElementStyle::new().with(StyleProperty::BackgroundPosition, from.to_css()),
            )
            .keyframe(
                1.0,
                ElementStyle::new().with(StyleProperty::BackgroundPosition, to.to_css()),
            );
        let rule = registry.borrow_mut().insert_rule(keyframes.into());

        let animation = CssAnimation::new(animation_name.clone(), config.duration_ms).infinite();
        element.set_style(StyleProperty::Position, "relative".to_string());
        element.set_style(StyleProperty::Overflow, "hidden".to_string());
        element.set_style(StyleProperty::Background, config.gradient().to_css());
        element.set_style(
            StyleProperty::BackgroundSize,
            config.background_size().to_css(),
        );
        element.set_style(StyleProperty::Animation, animation.to_css());

        debug!(
            animation = animation_name.as_str(),
            duration_ms = config.duration_ms,
            element = element.element_id().unwrap_or("<anonymous>"),
            "glimmer applied"
        );
        drop(element);

        Ok(GlimmerEffect {
            target,
            registry,
            duration_ms: config.duration_ms,
            animation_name,
            rule: Some(rule),
        })
    }
}
