pub mod axis;
pub mod align;
pub mod sizing;
pub mod space;
pub mod layout;
pub mod surface;
pub mod stylesheet;
pub mod parsers;

pub use toyframe_types::{Dim, Dimension};

pub use axis::{Direction, Pivot};
pub use align::{Align, ALIGN_EXTENT, ALIGN_SPACE};
pub use sizing::Sizing;
pub use space::{Space, SpacePreset, SPACE_PRESETS};
pub use layout::{AutoLayout, Flow, FrameType, LayoutSolver};
pub use surface::{Clipping, Opacity};
pub use stylesheet::FrameStyle;
pub use parsers::StyleParseError;

pub type DimSizing = Dim<Sizing>;
pub type DimAlign = Dim<Align>;
pub type DimPivot = Dim<Pivot>;
pub type DimAutoLayout = Dim<AutoLayout>;

#[cfg(test)]
mod space_test;
