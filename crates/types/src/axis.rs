//! Physical layout axes.
use serde::{Deserialize, Serialize};

/// Identifies one of the two physical layout axes.
///
/// `XX` and `YY` are the width/height spellings of `X` and `Y`: they address
/// the same two slots. `Null` means "no axis" and addresses nothing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum Dimension {
    X = 0,
    Y = 1,
    XX = 2,
    YY = 3,
    #[default]
    Null = 4,
}

impl Dimension {
    /// The two distinct axes, in slot order.
    pub const AXES: [Dimension; 2] = [Dimension::X, Dimension::Y];

    /// Returns the storage slot this axis addresses, or `None` for `Null`.
    #[inline]
    pub const fn slot(self) -> Option<usize> {
        match self {
            Dimension::X | Dimension::XX => Some(0),
            Dimension::Y | Dimension::YY => Some(1),
            Dimension::Null => None,
        }
    }

    /// Returns the other axis. `Null` stays `Null`.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Dimension::X | Dimension::XX => Dimension::Y,
            Dimension::Y | Dimension::YY => Dimension::X,
            Dimension::Null => Dimension::Null,
        }
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self, Dimension::Null)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::X => "x",
            Dimension::Y => "y",
            Dimension::XX => "xx",
            Dimension::YY => "yy",
            Dimension::Null => "null",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
