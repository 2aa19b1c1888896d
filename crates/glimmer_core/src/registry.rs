//! Style registry
//!
//! The registry is the document-level collection of style rules consulted
//! by whatever renders styled elements. It is passed explicitly to the code
//! that mutates it instead of living in a global, so tests can observe it.
//!
//! Rules are addressed by a generational `RuleId`: removing a rule makes its
//! id stale, and a stale id never aliases a rule inserted later.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

use crate::keyframes::CssKeyframes;

new_key_type! {
    /// Handle to a rule inserted into a style registry
    pub struct RuleId;
}

/// A style rule that can be registered
#[derive(Clone, Debug, PartialEq)]
pub enum StyleRule {
    /// An `@keyframes` block
    Keyframes(CssKeyframes),
}

impl StyleRule {
    /// Name the rule is referenced by
    pub fn name(&self) -> &str {
        match self {
            StyleRule::Keyframes(keyframes) => &keyframes.name,
        }
    }

    pub fn as_keyframes(&self) -> Option<&CssKeyframes> {
        match self {
            StyleRule::Keyframes(keyframes) => Some(keyframes),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            StyleRule::Keyframes(keyframes) => keyframes.to_css(),
        }
    }
}

impl From<CssKeyframes> for StyleRule {
    fn from(keyframes: CssKeyframes) -> Self {
        StyleRule::Keyframes(keyframes)
    }
}

/// Insert/remove access to a collection of style rules
pub trait StyleRegistry {
    /// Add a rule, returning the handle that removes it
    fn insert_rule(&mut self, rule: StyleRule) -> RuleId;

    /// Remove a rule; `None` if the id is unknown or already removed
    fn remove_rule(&mut self, id: RuleId) -> Option<StyleRule>;

    /// Look up a live rule
    fn rule(&self, id: RuleId) -> Option<&StyleRule>;

    /// Number of live rules
    fn rule_count(&self) -> usize;

    fn contains_rule(&self, id: RuleId) -> bool {
        self.rule(id).is_some()
    }
}

/// Shared handle to a registry used by several effects at once
pub type SharedStyleRegistry<R> = Rc<RefCell<R>>;

/// Wrap a registry for sharing
pub fn shared_registry<R: StyleRegistry>(registry: R) -> SharedStyleRegistry<R> {
    Rc::new(RefCell::new(registry))
}

/// In-memory style registry
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    rules: SlotMap<RuleId, StyleRule>,
    /// Live rule ids in insertion order
    order: Vec<RuleId>,
}

impl Stylesheet {
    /// Create an empty stylesheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over live rules in insertion order
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &StyleRule)> {
        self.order
            .iter()
            .filter_map(move |id| self.rules.get(*id).map(|rule| (*id, rule)))
    }

    /// Get a keyframe animation by name
    ///
    /// If several rules share a name, the most recently inserted one wins,
    /// matching CSS cascade order.
    pub fn get_keyframes(&self, name: &str) -> Option<&CssKeyframes> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.rules.get(*id))
            .filter_map(StyleRule::as_keyframes)
            .find(|keyframes| keyframes.name == name)
    }

    /// Check if keyframes exist with the given name
    pub fn contains_keyframes(&self, name: &str) -> bool {
        self.get_keyframes(name).is_some()
    }

    /// Get all keyframe animation names in insertion order
    pub fn keyframe_names(&self) -> impl Iterator<Item = &str> {
        self.rules()
            .filter_map(|(_, rule)| rule.as_keyframes())
            .map(|keyframes| keyframes.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Render every rule, separated by blank lines
    pub fn to_css(&self) -> String {
        self.rules()
            .map(|(_, rule)| rule.to_css())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl StyleRegistry for Stylesheet {
    fn insert_rule(&mut self, rule: StyleRule) -> RuleId {
        let name = rule.name().to_string();
        let id = self.rules.insert(rule);
        self.order.push(id);
        trace!(rule = name.as_str(), total = self.rules.len(), "style rule inserted");
        id
    }

    fn remove_rule(&mut self, id: RuleId) -> Option<StyleRule> {
        let rule = self.rules.remove(id)?;
        self.order.retain(|existing| *existing != id);
        trace!(rule = rule.name(), total = self.rules.len(), "style rule removed");
        Some(rule)
    }

    fn rule(&self, id: RuleId) -> Option<&StyleRule> {
        self.rules.get(id)
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
