//! Alignment of a child inside the space its parent gives it.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of the child's own extent subtracted from its position, per [`Align`].
pub const ALIGN_EXTENT: [f32; 5] = [0.0, 0.5, 1.0, 1.0, 0.0];

/// Fraction of the available space added to the child's position, per [`Align`].
pub const ALIGN_SPACE: [f32; 5] = [0.0, 0.5, 1.0, 0.0, 1.0];

/// Placement of a child along one axis.
///
/// `OutLeft` and `OutRight` place the child just outside the available space,
/// touching its near or far edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum Align {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
    OutLeft = 3,
    OutRight = 4,
}

impl Align {
    #[inline]
    pub fn extent_factor(self) -> f32 {
        ALIGN_EXTENT[self as usize]
    }

    #[inline]
    pub fn space_factor(self) -> f32 {
        ALIGN_SPACE[self as usize]
    }

    /// Offset of an `extent`-sized child inside `space`.
    #[inline]
    pub fn offset(self, space: f32, extent: f32) -> f32 {
        space * self.space_factor() - extent * self.extent_factor()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::OutLeft => "out-left",
            Align::OutRight => "out-right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
