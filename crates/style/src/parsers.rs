//! Low-level nom parser functions for textual frame style values.
//!
//! Keywords are matched case-insensitively and ignore `-`/`_` separators, so
//! `OUT_LEFT`, `out-left` and `outleft` all name [`Align::OutLeft`].

use crate::align::Align;
use crate::axis::{Direction, Pivot};
use crate::layout::{AutoLayout, Flow, FrameType, LayoutSolver};
use crate::sizing::Sizing;
use crate::space::{Space, SpacePreset};
use crate::stylesheet::FrameStyle;
use crate::surface::{Clipping, Opacity};
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::space1;
use nom::combinator::map_res;
use nom::multi::separated_list1;
use nom::number::complete::float;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use std::str::FromStr;
use thiserror::Error;
use toyframe_types::{BoxFloat, Dim};

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Float parse error: {0}")]
    FloatParse(String),
}

// --- Helper Parsers ---

fn keyword_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

fn invalid(property: &str, value: &str) -> StyleParseError {
    StyleParseError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

/// Parses one bare keyword such as `paragraph` or `out-left`.
pub fn keyword(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_').parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- Keyword Parsers ---

pub fn parse_direction(s: &str) -> Result<Direction, StyleParseError> {
    match keyword_key(s).as_str() {
        "reading" => Ok(Direction::Reading),
        "paragraph" => Ok(Direction::Paragraph),
        "parallel" => Ok(Direction::Parallel),
        "orthogonal" => Ok(Direction::Orthogonal),
        "none" | "directionnone" => Ok(Direction::None),
        _ => Err(invalid("direction", s)),
    }
}

pub fn parse_pivot(s: &str) -> Result<Pivot, StyleParseError> {
    match keyword_key(s).as_str() {
        "forward" => Ok(Pivot::Forward),
        "reverse" => Ok(Pivot::Reverse),
        _ => Err(invalid("pivot", s)),
    }
}

pub fn parse_align(s: &str) -> Result<Align, StyleParseError> {
    match keyword_key(s).as_str() {
        "left" => Ok(Align::Left),
        "center" => Ok(Align::Center),
        "right" => Ok(Align::Right),
        "outleft" => Ok(Align::OutLeft),
        "outright" => Ok(Align::OutRight),
        _ => Err(invalid("align", s)),
    }
}

pub fn parse_sizing(s: &str) -> Result<Sizing, StyleParseError> {
    match keyword_key(s).as_str() {
        "fixed" => Ok(Sizing::Fixed),
        "shrink" => Ok(Sizing::Shrink),
        "wrap" => Ok(Sizing::Wrap),
        "expand" => Ok(Sizing::Expand),
        _ => Err(invalid("sizing", s)),
    }
}

pub fn parse_space_preset(s: &str) -> Result<SpacePreset, StyleParseError> {
    match keyword_key(s).as_str() {
        "sheet" => Ok(SpacePreset::Sheet),
        "flex" => Ok(SpacePreset::Flex),
        "item" => Ok(SpacePreset::Item),
        "unit" => Ok(SpacePreset::Unit),
        "block" => Ok(SpacePreset::Block),
        "line" => Ok(SpacePreset::Line),
        "stack" => Ok(SpacePreset::Stack),
        "div" => Ok(SpacePreset::Div),
        "spacer" => Ok(SpacePreset::Spacer),
        "board" => Ok(SpacePreset::Board),
        "layout" => Ok(SpacePreset::Layout),
        _ => Err(invalid("space", s)),
    }
}

pub fn parse_clipping(s: &str) -> Result<Clipping, StyleParseError> {
    match keyword_key(s).as_str() {
        "noclip" => Ok(Clipping::NoClip),
        "clip" => Ok(Clipping::Clip),
        _ => Err(invalid("clipping", s)),
    }
}

pub fn parse_opacity(s: &str) -> Result<Opacity, StyleParseError> {
    match keyword_key(s).as_str() {
        "opaque" => Ok(Opacity::Opaque),
        "clear" => Ok(Opacity::Clear),
        "hollow" => Ok(Opacity::Hollow),
        _ => Err(invalid("opacity", s)),
    }
}

pub fn parse_auto_layout(s: &str) -> Result<AutoLayout, StyleParseError> {
    match keyword_key(s).as_str() {
        "nolayout" => Ok(AutoLayout::NoLayout),
        "autosize" => Ok(AutoLayout::AutoSize),
        "autolayout" => Ok(AutoLayout::AutoLayout),
        _ => Err(invalid("layout", s)),
    }
}

pub fn parse_flow(s: &str) -> Result<Flow, StyleParseError> {
    match keyword_key(s).as_str() {
        "flow" => Ok(Flow::Flow),
        "overlay" => Ok(Flow::Overlay),
        "align" => Ok(Flow::Align),
        "free" => Ok(Flow::Free),
        _ => Err(invalid("flow", s)),
    }
}

pub fn parse_frame_type(s: &str) -> Result<FrameType, StyleParseError> {
    match keyword_key(s).as_str() {
        "frame" => Ok(FrameType::Frame),
        "layer" => Ok(FrameType::Layer),
        "masterlayer" => Ok(FrameType::MasterLayer),
        "spacelayer" => Ok(FrameType::SpaceLayer),
        _ => Err(invalid("frame-type", s)),
    }
}

pub fn parse_layout_solver(s: &str) -> Result<LayoutSolver, StyleParseError> {
    match keyword_key(s).as_str() {
        "frame" | "framesolver" => Ok(LayoutSolver::Frame),
        "row" | "rowsolver" => Ok(LayoutSolver::Row),
        "grid" | "gridsolver" => Ok(LayoutSolver::Grid),
        "table" | "tablesolver" => Ok(LayoutSolver::Table),
        _ => Err(invalid("solver", s)),
    }
}

// --- Compound Parsers ---

/// Parses a space as a preset name (`"line"`) or an explicit
/// `"<direction> <length sizing> <depth sizing>"` triple.
pub fn parse_space(input: &str) -> IResult<&str, Space> {
    alt((
        map_res(
            (keyword, preceded(space1, keyword), preceded(space1, keyword)),
            |(direction, length, depth)| -> Result<Space, StyleParseError> {
                Ok(Space::new(
                    parse_direction(direction)?,
                    parse_sizing(length)?,
                    parse_sizing(depth)?,
                ))
            },
        ),
        map_res(keyword, |name| parse_space_preset(name).map(Space::preset)),
    ))
    .parse(input)
}

/// Parses a box shorthand: one uniform value, `"w h"` at the origin, or `"x y w h"`.
pub fn parse_box(input: &str) -> Result<BoxFloat, StyleParseError> {
    let parts_res: IResult<&str, Vec<f32>> = separated_list1(space1, float).parse(input.trim());

    match parts_res {
        Ok(("", parts)) => match parts.as_slice() {
            [v] => Ok(BoxFloat::uniform(*v)),
            [w, h] => Ok(BoxFloat::new(0.0, 0.0, *w, *h)),
            [x, y, w, h] => Ok(BoxFloat::new(*x, *y, *w, *h)),
            _ => Err(StyleParseError::Parse(format!(
                "Invalid number of values for box shorthand: got {}, expected 1, 2, or 4.",
                parts.len()
            ))),
        },
        _ => Err(StyleParseError::FloatParse(format!(
            "Failed to parse box value: '{}'",
            input
        ))),
    }
}

/// Parses a per-axis pair such as `"center left"`. A single value applies to both axes.
pub fn parse_dim_pair<T: Copy>(
    input: &str,
    parse_item: fn(&str) -> Result<T, StyleParseError>,
) -> Result<Dim<T>, StyleParseError> {
    let parts_res: IResult<&str, Vec<&str>> =
        separated_list1(space1, keyword).parse(input.trim());

    match parts_res {
        Ok(("", parts)) => match parts.as_slice() {
            [both] => Ok(Dim::splat(parse_item(both)?)),
            [x, y] => Ok(Dim::new(parse_item(x)?, parse_item(y)?)),
            _ => Err(StyleParseError::Parse(format!(
                "Invalid number of values for axis pair: got {}, expected 1 or 2.",
                parts.len()
            ))),
        },
        _ => Err(StyleParseError::Parse(format!(
            "Failed to parse axis pair: '{}'",
            input
        ))),
    }
}

// --- FromStr ---

macro_rules! from_str_via {
    ($($ty:ty => $parse:ident),* $(,)?) => {
        $(impl FromStr for $ty {
            type Err = StyleParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $parse(s)
            }
        })*
    };
}

from_str_via! {
    Direction => parse_direction,
    Pivot => parse_pivot,
    Align => parse_align,
    Sizing => parse_sizing,
    SpacePreset => parse_space_preset,
    Clipping => parse_clipping,
    Opacity => parse_opacity,
    AutoLayout => parse_auto_layout,
    Flow => parse_flow,
    FrameType => parse_frame_type,
    LayoutSolver => parse_layout_solver,
}

impl FromStr for Space {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run_parser(parse_space, s)
    }
}

// --- High-level Style Application Functions ---

/// Applies a single textual property to a `FrameStyle`.
pub fn apply_style_property(
    style: &mut FrameStyle,
    attr_name: &str,
    value: &str,
) -> Result<(), StyleParseError> {
    match attr_name {
        "space" => style.space = Some(run_parser(parse_space, value)?),
        "align" => style.align = Some(parse_dim_pair(value, parse_align)?),
        "pivot" => style.pivot = Some(parse_dim_pair(value, parse_pivot)?),
        "layout" => style.layout = Some(parse_dim_pair(value, parse_auto_layout)?),
        "flow" => style.flow = Some(parse_flow(value)?),
        "solver" => style.solver = Some(parse_layout_solver(value)?),
        "frame-type" => style.frame_type = Some(parse_frame_type(value)?),
        "clipping" => style.clipping = Some(parse_clipping(value)?),
        "opacity" => style.opacity = Some(parse_opacity(value)?),
        _ => log::debug!("Ignoring unknown frame style property '{}'", attr_name),
    };
    Ok(())
}

/// Parses an inline `"key: value; ..."` declaration list.
pub fn parse_inline_style(
    declarations: &str,
    style_override: &mut FrameStyle,
) -> Result<(), StyleParseError> {
    for declaration in declarations.split(';') {
        if let Some((key, value)) = declaration.split_once(':') {
            apply_style_property(style_override, key.trim(), value.trim())?;
        }
    }
    Ok(())
}
