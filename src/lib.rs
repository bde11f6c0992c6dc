//! Axis-indexed geometry and sizing-policy model for widget layout.
//!
//! Geometry value types live in [`types`], the flow/sizing vocabulary and
//! space presets in [`style`]. This crate adds the [`Frame`] record that ties
//! a resolved [`Space`] to its laid-out [`BoxFloat`], and JSON configuration.

pub mod config;
pub mod error;
pub mod frame;

pub use toyframe_style as style;
pub use toyframe_types as types;

pub use config::FrameConfig;
pub use error::FrameError;
pub use frame::Frame;

pub use toyframe_style::{
    Align, AutoLayout, Clipping, Direction, Flow, FrameStyle, FrameType, LayoutSolver, Opacity,
    Pivot, Sizing, Space, SpacePreset, StyleParseError, ALIGN_EXTENT, ALIGN_SPACE, SPACE_PRESETS,
};
pub use toyframe_types::{BoxFloat, BoxState, Dim, DimFloat, Dimension};
