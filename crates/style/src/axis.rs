//! Flow-relative axis vocabulary: how a container's axes relate to writing direction.
use serde::{Deserialize, Serialize};
use std::fmt;
use toyframe_types::Dimension;

/// How a container's length axis relates to the ambient writing direction.
///
/// This is not a compass direction: `Reading` follows text lines, `Paragraph`
/// follows the stacking of lines, and `Parallel`/`Orthogonal` are relative to
/// the parent container's own length axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum Direction {
    Reading = 0,
    Paragraph = 1,
    Parallel = 2,
    Orthogonal = 3,
    #[default]
    None = 4,
}

impl Direction {
    /// Resolves the physical length axis, given the parent's length axis.
    pub fn length_axis(self, parent_length: Dimension) -> Dimension {
        match self {
            Direction::Reading => Dimension::X,
            Direction::Paragraph => Dimension::Y,
            Direction::Parallel => parent_length,
            Direction::Orthogonal => parent_length.flip(),
            Direction::None => Dimension::Null,
        }
    }

    pub fn depth_axis(self, parent_length: Dimension) -> Dimension {
        self.length_axis(parent_length).flip()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Reading => "reading",
            Direction::Paragraph => "paragraph",
            Direction::Parallel => "parallel",
            Direction::Orthogonal => "orthogonal",
            Direction::None => "none",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which end of an axis content grows from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum Pivot {
    #[default]
    Forward = 0,
    Reverse = 1,
}

impl Pivot {
    /// Maps a forward offset of an `extent`-sized child inside `space` onto
    /// this pivot. `Reverse` mirrors it against the far end.
    #[inline]
    pub fn resolve(self, offset: f32, space: f32, extent: f32) -> f32 {
        match self {
            Pivot::Forward => offset,
            Pivot::Reverse => space - offset - extent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pivot::Forward => "forward",
            Pivot::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
