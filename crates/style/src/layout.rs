//! Frame roles and how a frame takes part in its parent's layout.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a solver computes a frame's size, its position, both, or neither.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum AutoLayout {
    NoLayout = 0,
    AutoSize = 1,
    #[default]
    AutoLayout = 2,
}

/// How a frame participates in its parent's flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum Flow {
    /// Laid out in sequence with its siblings.
    #[default]
    Flow = 0,
    /// Sized by the parent, stacked over siblings.
    Overlay = 1,
    /// Sized by the parent, positioned by its alignment only.
    Align = 2,
    /// Positioned and sized manually.
    Free = 3,
}

impl Flow {
    /// The per-axis automation implied by this flow.
    pub fn auto_layout(self) -> AutoLayout {
        match self {
            Flow::Flow => AutoLayout::AutoLayout,
            Flow::Overlay | Flow::Align => AutoLayout::AutoSize,
            Flow::Free => AutoLayout::NoLayout,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum FrameType {
    #[default]
    Frame = 0,
    Layer = 1,
    MasterLayer = 2,
    SpaceLayer = 3,
}

/// The solver family that lays out a frame's children.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
#[repr(u32)]
pub enum LayoutSolver {
    #[default]
    Frame = 0,
    Row = 1,
    Grid = 2,
    Table = 3,
}

impl AutoLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            AutoLayout::NoLayout => "no-layout",
            AutoLayout::AutoSize => "auto-size",
            AutoLayout::AutoLayout => "auto-layout",
        }
    }
}

impl Flow {
    pub fn as_str(self) -> &'static str {
        match self {
            Flow::Flow => "flow",
            Flow::Overlay => "overlay",
            Flow::Align => "align",
            Flow::Free => "free",
        }
    }
}

impl FrameType {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameType::Frame => "frame",
            FrameType::Layer => "layer",
            FrameType::MasterLayer => "master-layer",
            FrameType::SpaceLayer => "space-layer",
        }
    }
}

impl LayoutSolver {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutSolver::Frame => "frame",
            LayoutSolver::Row => "row",
            LayoutSolver::Grid => "grid",
            LayoutSolver::Table => "table",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(AutoLayout, Flow, FrameType, LayoutSolver);
