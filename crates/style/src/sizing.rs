use serde::{Deserialize, Serialize};
use std::fmt;

/// How a solver computes a frame's extent along one axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum Sizing {
    /// Explicit size, never recomputed.
    Fixed = 0,
    /// The content's minimum size.
    #[default]
    Shrink = 1,
    /// The content's preferred size; content may wrap.
    Wrap = 2,
    /// The space available, shared among expanding siblings.
    Expand = 3,
}

impl Sizing {
    /// Picks the extent this policy asks for. `available` is the share of
    /// space the solver has already allotted to this frame.
    #[inline]
    pub fn resolve_extent(
        self,
        fixed: f32,
        content_min: f32,
        content_preferred: f32,
        available: f32,
    ) -> f32 {
        match self {
            Sizing::Fixed => fixed,
            Sizing::Shrink => content_min,
            Sizing::Wrap => content_preferred,
            Sizing::Expand => available,
        }
    }

    /// True for policies whose extent is derived from content.
    pub fn is_content_sized(self) -> bool {
        matches!(self, Sizing::Shrink | Sizing::Wrap)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sizing::Fixed => "fixed",
            Sizing::Shrink => "shrink",
            Sizing::Wrap => "wrap",
            Sizing::Expand => "expand",
        }
    }
}

impl fmt::Display for Sizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
