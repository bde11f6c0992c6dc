//! Space: a frame's direction plus its sizing on the length and depth axes.
use crate::axis::Direction;
use crate::parsers::{parse_space, run_parser};
use crate::sizing::Sizing;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use toyframe_types::{Dim, Dimension};

/// Direction and per-axis sizing of a frame.
///
/// Length is the frame's primary axis as given by `direction`, depth the
/// other one. A frame's space is fixed once the frame is built.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub direction: Direction,
    pub sizing_length: Sizing,
    pub sizing_depth: Sizing,
}

impl Space {
    pub const fn new(direction: Direction, sizing_length: Sizing, sizing_depth: Sizing) -> Self {
        Self {
            direction,
            sizing_length,
            sizing_depth,
        }
    }

    /// Looks up the space a preset stands for.
    #[inline]
    pub fn preset(preset: SpacePreset) -> Self {
        SPACE_PRESETS[preset as usize]
    }

    pub fn length_axis(&self, parent_length: Dimension) -> Dimension {
        self.direction.length_axis(parent_length)
    }

    pub fn depth_axis(&self, parent_length: Dimension) -> Dimension {
        self.direction.depth_axis(parent_length)
    }

    /// Projects length/depth sizing onto the physical x/y slots.
    ///
    /// A space without a direction has no length axis; both slots then carry
    /// the length sizing.
    pub fn sizing_dim(&self, parent_length: Dimension) -> Dim<Sizing> {
        let length = self.length_axis(parent_length);
        if length.is_null() {
            return Dim::splat(self.sizing_length);
        }
        let mut sizing = Dim::splat(self.sizing_depth);
        sizing[length] = self.sizing_length;
        sizing
    }

    /// Returns the preset this space matches, if any.
    pub fn as_preset(&self) -> Option<SpacePreset> {
        SpacePreset::ALL
            .into_iter()
            .find(|preset| SPACE_PRESETS[*preset as usize] == *self)
    }
}

impl From<SpacePreset> for Space {
    fn from(preset: SpacePreset) -> Self {
        Space::preset(preset)
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.direction, self.sizing_length, self.sizing_depth
        )
    }
}

impl<'de> Deserialize<'de> for Space {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum SpaceDef {
            Str(String),
            Map {
                direction: Direction,
                #[serde(rename = "sizingLength")]
                sizing_length: Sizing,
                #[serde(rename = "sizingDepth")]
                sizing_depth: Sizing,
            },
        }

        match SpaceDef::deserialize(deserializer)? {
            SpaceDef::Str(s) => run_parser(parse_space, &s).map_err(de::Error::custom),
            SpaceDef::Map {
                direction,
                sizing_length,
                sizing_depth,
            } => Ok(Space::new(direction, sizing_length, sizing_depth)),
        }
    }
}

/// Named layout archetypes, each standing for one fixed [`Space`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[repr(u32)]
pub enum SpacePreset {
    Sheet = 0,
    Flex = 1,
    Item = 2,
    Unit = 3,
    Block = 4,
    Line = 5,
    Stack = 6,
    Div = 7,
    Spacer = 8,
    Board = 9,
    Layout = 10,
}

impl SpacePreset {
    pub const ALL: [SpacePreset; 11] = [
        SpacePreset::Sheet,
        SpacePreset::Flex,
        SpacePreset::Item,
        SpacePreset::Unit,
        SpacePreset::Block,
        SpacePreset::Line,
        SpacePreset::Stack,
        SpacePreset::Div,
        SpacePreset::Spacer,
        SpacePreset::Board,
        SpacePreset::Layout,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpacePreset::Sheet => "sheet",
            SpacePreset::Flex => "flex",
            SpacePreset::Item => "item",
            SpacePreset::Unit => "unit",
            SpacePreset::Block => "block",
            SpacePreset::Line => "line",
            SpacePreset::Stack => "stack",
            SpacePreset::Div => "div",
            SpacePreset::Spacer => "spacer",
            SpacePreset::Board => "board",
            SpacePreset::Layout => "layout",
        }
    }
}

impl fmt::Display for SpacePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use Direction::{Orthogonal, Paragraph, Parallel, Reading};
use Sizing::{Expand, Fixed, Shrink, Wrap};

/// The space of every [`SpacePreset`], indexed by the preset's discriminant.
pub const SPACE_PRESETS: [Space; 11] = [
    Space::new(Paragraph, Wrap, Wrap),     // Sheet
    Space::new(Parallel, Wrap, Wrap),      // Flex
    Space::new(Reading, Shrink, Shrink),   // Item
    Space::new(Paragraph, Shrink, Shrink), // Unit
    Space::new(Paragraph, Fixed, Fixed),   // Block
    Space::new(Reading, Wrap, Shrink),     // Line
    Space::new(Paragraph, Shrink, Wrap),   // Stack
    Space::new(Orthogonal, Wrap, Shrink),  // Div
    Space::new(Parallel, Wrap, Shrink),    // Spacer
    Space::new(Reading, Expand, Expand),   // Board
    Space::new(Paragraph, Expand, Expand), // Layout
];
