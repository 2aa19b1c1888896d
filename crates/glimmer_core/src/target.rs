//! Style targets and host values
//!
//! A `StyleTarget` is anything that supports inline style-property
//! assignment: the capability an effect needs from the element it decorates.
//!
//! Values arriving from a host (a scripting layer, a UI tree lookup) are
//! carried as `HostValue`; only the `Element` variant has the capability,
//! and `HostValue::as_style_target` is the one place that checks it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::style::{ElementStyle, StyleProperty};

/// Something that supports style-property assignment
pub trait StyleTarget {
    /// Inline style of the element
    fn style(&self) -> &ElementStyle;

    fn style_mut(&mut self) -> &mut ElementStyle;

    /// Element id, if it has one
    fn element_id(&self) -> Option<&str> {
        None
    }

    fn set_style(&mut self, property: StyleProperty, value: String) {
        self.style_mut().set(property, value);
    }

    /// Reset a property to empty
    fn clear_style(&mut self, property: StyleProperty) {
        self.style_mut().clear_property(property);
    }

    fn style_value(&self, property: StyleProperty) -> Option<&str> {
        self.style().get(property)
    }
}

/// Shared handle to an element owned elsewhere
pub type SharedStyleTarget = Rc<RefCell<dyn StyleTarget>>;

/// A plain element with an inline style
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    style: ElementStyle,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            style: ElementStyle::new(),
        }
    }

    /// Set the element id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Start from an existing inline style
    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Wrap in a shared handle
    pub fn into_shared(self) -> Rc<RefCell<Element>> {
        Rc::new(RefCell::new(self))
    }
}

impl StyleTarget for Element {
    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }

    fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A dynamically typed value handed over by a host
#[derive(Clone)]
pub enum HostValue {
    /// No value
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// An element with the style-target capability
    Element(SharedStyleTarget),
}

impl HostValue {
    /// Wrap an already type-erased element handle
    pub fn element(target: SharedStyleTarget) -> Self {
        HostValue::Element(target)
    }

    /// The capability check: `Some` only for values that accept styles
    pub fn as_style_target(&self) -> Option<SharedStyleTarget> {
        match self {
            HostValue::Element(target) => Some(Rc::clone(target)),
            _ => None,
        }
    }

    /// Kind of value, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Null => "null",
            HostValue::Bool(_) => "bool",
            HostValue::Number(_) => "number",
            HostValue::String(_) => "string",
            HostValue::Element(_) => "element",
        }
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Null => write!(f, "Null"),
            HostValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            HostValue::Number(v) => f.debug_tuple("Number").field(v).finish(),
            HostValue::String(v) => f.debug_tuple("String").field(v).finish(),
            HostValue::Element(target) => {
                let id = target
                    .try_borrow()
                    .ok()
                    .and_then(|t| t.element_id().map(str::to_string));
                f.debug_struct("Element").field("id", &id).finish()
            }
        }
    }
}

impl From<()> for HostValue {
    fn from(_: ()) -> Self {
        HostValue::Null
    }
}

impl From<bool> for HostValue {
    fn from(v: bool) -> Self {
        HostValue::Bool(v)
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        HostValue::Number(v)
    }
}

impl From<i32> for HostValue {
    fn from(v: i32) -> Self {
        HostValue::Number(v as f64)
    }
}

impl From<i64> for HostValue {
    fn from(v: i64) -> Self {
        HostValue::Number(v as f64)
    }
}

impl From<&str> for HostValue {
    fn from(v: &str) -> Self {
        HostValue::String(v.to_string())
    }
}

impl From<String> for HostValue {
    fn from(v: String) -> Self {
        HostValue::String(v)
    }
}

impl<T: StyleTarget + 'static> From<Rc<RefCell<T>>> for HostValue {
    fn from(target: Rc<RefCell<T>>) -> Self {
        HostValue::Element(target)
    }
}

impl<T: StyleTarget + 'static> From<&Rc<RefCell<T>>> for HostValue {
    fn from(target: &Rc<RefCell<T>>) -> Self {
        HostValue::Element(Rc::clone(target) as SharedStyleTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_has_capability() {
        let banner = Element::new("div").id("banner").into_shared();
        let value = HostValue::from(&banner);

        let target = value.as_style_target().unwrap();
        target
            .borrow_mut()
            .set_style(StyleProperty::Overflow, "hidden".to_string());

        assert_eq!(banner.borrow().style_value(StyleProperty::Overflow), Some("hidden"));
        assert_eq!(value.type_name(), "element");
    }

    #[test]
    fn test_plain_values_lack_capability() {
        for value in [
            HostValue::from("banner"),
            HostValue::from(42),
            HostValue::from(1.5),
            HostValue::from(true),
            HostValue::from(()),
        ] {
            assert!(value.as_style_target().is_none(), "{:?}", value);
        }
    }

    #[test]
    fn test_clear_style_resets_to_empty() {
        let mut element = Element::new("span");
        element.set_style(StyleProperty::Background, "red".to_string());
        element.clear_style(StyleProperty::Background);
        assert_eq!(element.style_value(StyleProperty::Background), Some(""));
    }

    #[test]
    fn test_debug_shows_element_id() {
        let value = HostValue::from(Element::new("div").id("card").into_shared());
        assert_eq!(format!("{:?}", value), "Element { id: Some(\"card\") }");
    }
}
