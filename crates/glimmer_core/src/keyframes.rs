//! Keyframe rules and the `animation` shorthand
//!
//! `CssKeyframes` is the rule a registry stores; `CssAnimation` is the value
//! an element's `animation` property holds to reference it.
//!
//! # Example
//!
//! ```
//! use glimmer_core::{CssAnimation, IterationCount};
//!
//! let animation = CssAnimation::parse("glimmer_k3j9x 2000ms infinite").unwrap();
//! assert_eq!(animation.name, "glimmer_k3j9x");
//! assert_eq!(animation.duration_ms, 2000);
//! assert_eq!(animation.iterations, IterationCount::Infinite);
//! ```

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{multispace0, multispace1},
    combinator::{all_consuming, cut, map, map_opt, recognize, value},
    error::{context, VerboseError, VerboseErrorKind},
    multi::many0,
    number::complete::double,
    sequence::{delimited, pair, preceded, tuple},
    Finish, IResult,
};
use tracing::debug;

use crate::error::ParseError;
use crate::style::{ElementStyle, StyleProperty};

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// A CSS keyframe animation definition
///
/// Represents an `@keyframes` rule with multiple stops.
#[derive(Clone, Debug, PartialEq)]
pub struct CssKeyframes {
    /// Animation name
    pub name: String,
    /// Keyframe stops (position 0.0-1.0 -> style properties)
    pub keyframes: Vec<CssKeyframe>,
}

/// A single keyframe stop in an animation
#[derive(Clone, Debug, PartialEq)]
pub struct CssKeyframe {
    /// Position in the animation (0.0 = start, 1.0 = end)
    pub position: f32,
    /// Style properties at this keyframe
    pub style: ElementStyle,
}

impl CssKeyframes {
    /// Create a new keyframes definition
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyframes: Vec::new(),
        }
    }

    /// Add a keyframe at a specific position
    pub fn add_keyframe(&mut self, position: f32, style: ElementStyle) {
        self.keyframes.push(CssKeyframe { position, style });
        // Keep keyframes sorted by position
        self.keyframes
            .sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Builder form of [`CssKeyframes::add_keyframe`]
    pub fn keyframe(mut self, position: f32, style: ElementStyle) -> Self {
        self.add_keyframe(position, style);
        self
    }

    /// Serialize as an `@keyframes` block
    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for kf in &self.keyframes {
            css.push_str(&format!(
                "  {}% {{ {} }}\n",
                kf.position * 100.0,
                kf.style.to_css_declarations()
            ));
        }
        css.push('}');
        css
    }
}

/// How many times an animation cycle repeats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationCount {
    Infinite,
    Count(u32),
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Count(1)
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationCount::Infinite => write!(f, "infinite"),
            IterationCount::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Animation timing function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationTiming {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl AnimationTiming {
    fn from_keyword(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Some(AnimationTiming::Linear),
            "ease" => Some(AnimationTiming::Ease),
            "ease-in" => Some(AnimationTiming::EaseIn),
            "ease-out" => Some(AnimationTiming::EaseOut),
            "ease-in-out" => Some(AnimationTiming::EaseInOut),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            AnimationTiming::Linear => "linear",
            AnimationTiming::Ease => "ease",
            AnimationTiming::EaseIn => "ease-in",
            AnimationTiming::EaseOut => "ease-out",
            AnimationTiming::EaseInOut => "ease-in-out",
        }
    }
}

/// Value of an element's `animation` property
///
/// Durations are signed and unvalidated: a zero or negative duration is
/// carried through to the rendered value unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssAnimation {
    /// Name of the @keyframes to use
    pub name: String,
    /// Duration in milliseconds
    pub duration_ms: i64,
    /// Timing function, omitted from the shorthand when `None`
    pub timing: Option<AnimationTiming>,
    /// Number of iterations
    pub iterations: IterationCount,
}

impl CssAnimation {
    pub fn new(name: impl Into<String>, duration_ms: i64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            timing: None,
            iterations: IterationCount::default(),
        }
    }

    /// Repeat forever
    pub fn infinite(mut self) -> Self {
        self.iterations = IterationCount::Infinite;
        self
    }

    pub fn timing(mut self, timing: AnimationTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Serialize as the `animation` shorthand, e.g. `pulse 1500ms infinite`
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Parse the `animation` shorthand
    ///
    /// Accepts `<name> <duration> [<timing>] [<iteration-count>]` with the
    /// trailing parts in either order. Durations may be given in `ms` or `s`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match all_consuming(animation_shorthand)(input).finish() {
            Ok((_, animation)) => Ok(animation),
            Err(err) => {
                let error = parse_error_from_verbose(input, err);
                debug!("failed to parse animation shorthand {:?}: {}", input, error);
                Err(error)
            }
        }
    }
}

impl fmt::Display for CssAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms", self.name, self.duration_ms)?;
        if let Some(timing) = self.timing {
            write!(f, " {}", timing.keyword())?;
        }
        write!(f, " {}", self.iterations)
    }
}

/// Convenience: read the animation currently assigned in a style
impl ElementStyle {
    /// Parse the `animation` property, `None` if unset or empty
    pub fn animation(&self) -> Option<Result<CssAnimation, ParseError>> {
        self.get(StyleProperty::Animation)
            .filter(|value| !value.is_empty())
            .map(CssAnimation::parse)
    }
}

// =============================================================================
// Shorthand parser
// =============================================================================

#[derive(Clone, Copy)]
enum ShorthandOption {
    Timing(AnimationTiming),
    Iterations(IterationCount),
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn identifier(input: &str) -> ParseResult<'_, &str> {
    context(
        "animation name",
        recognize(pair(take_while1(is_ident_start), take_while(is_ident_char))),
    )(input)
}

fn duration_ms(input: &str) -> ParseResult<'_, i64> {
    context(
        "duration",
        map(
            pair(
                double,
                alt((
                    value(1.0, tag_no_case("ms")),
                    value(1000.0, tag_no_case("s")),
                )),
            ),
            |(amount, scale)| (amount * scale).round() as i64,
        ),
    )(input)
}

fn shorthand_option(input: &str) -> ParseResult<'_, ShorthandOption> {
    context(
        "timing or iteration count",
        map_opt(take_while1(|c: char| !c.is_whitespace()), |word: &str| {
            if word.eq_ignore_ascii_case("infinite") {
                return Some(ShorthandOption::Iterations(IterationCount::Infinite));
            }
            if let Ok(count) = word.parse::<u32>() {
                return Some(ShorthandOption::Iterations(IterationCount::Count(count)));
            }
            AnimationTiming::from_keyword(word).map(ShorthandOption::Timing)
        }),
    )(input)
}

fn animation_shorthand(input: &str) -> ParseResult<'_, CssAnimation> {
    map(
        delimited(
            multispace0,
            tuple((
                identifier,
                cut(preceded(multispace1, duration_ms)),
                many0(preceded(multispace1, shorthand_option)),
            )),
            multispace0,
        ),
        |(name, duration_ms, options)| {
            let mut animation = CssAnimation::new(name, duration_ms);
            for option in options {
                match option {
                    ShorthandOption::Timing(timing) => animation.timing = Some(timing),
                    ShorthandOption::Iterations(count) => animation.iterations = count,
                }
            }
            animation
        },
    )(input)
}

fn parse_error_from_verbose(input: &str, err: VerboseError<&str>) -> ParseError {
    let fragment = err.errors.first().map(|(frag, _)| *frag).unwrap_or(input);

    let contexts: Vec<&str> = err
        .errors
        .iter()
        .rev()
        .filter_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(ctx) => Some(*ctx),
            _ => None,
        })
        .collect();

    let message = if contexts.is_empty() {
        "invalid animation shorthand".to_string()
    } else {
        format!("expected {}", contexts.join(" > "))
    };

    ParseError::at(input, fragment, message)
}
