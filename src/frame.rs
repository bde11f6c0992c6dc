//! The widget-side frame record: resolved space, placement rules and geometry.

use crate::config::FrameConfig;
use crate::error::FrameError;
use toyframe_style::{
    Align, AutoLayout, Clipping, DimAlign, DimAutoLayout, DimPivot, DimSizing, FrameStyle,
    FrameType, LayoutSolver, Opacity, Pivot, Space, SpacePreset,
};
use toyframe_types::{BoxFloat, Dim, DimFloat, Dimension};

/// A frame's layout state.
///
/// The [`Space`] is resolved once at construction and never changes. Solvers
/// write the frame's geometry; paint and hit-testing read it and skip frames
/// whose geometry is still null.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    space: Space,
    align: DimAlign,
    pivot: DimPivot,
    layout: DimAutoLayout,
    solver: LayoutSolver,
    frame_type: FrameType,
    clipping: Clipping,
    opacity: Opacity,
    geometry: BoxFloat,
}

impl Frame {
    pub fn new(preset: SpacePreset) -> Self {
        let space = Space::preset(preset);
        log::trace!("Expanding preset '{}' to space '{}'", preset, space);
        Self::with_space(space)
    }

    pub fn with_space(space: Space) -> Self {
        Self {
            space,
            align: Dim::splat(Align::default()),
            pivot: Dim::splat(Pivot::default()),
            layout: Dim::splat(AutoLayout::default()),
            solver: LayoutSolver::default(),
            frame_type: FrameType::default(),
            clipping: Clipping::default(),
            opacity: Opacity::default(),
            geometry: BoxFloat::default(),
        }
    }

    /// Builds a frame from a resolved style. The style must carry a space.
    pub fn from_style(name: &str, style: &FrameStyle) -> Result<Self, FrameError> {
        let space = style
            .space
            .ok_or_else(|| FrameError::MissingSpace(name.to_string()))?;

        let mut frame = Self::with_space(space);
        if let Some(align) = style.align {
            frame.align = align;
        }
        if let Some(pivot) = style.pivot {
            frame.pivot = pivot;
        }
        if let Some(layout) = style.resolved_layout() {
            frame.layout = layout;
        }
        if let Some(solver) = style.solver {
            frame.solver = solver;
        }
        if let Some(frame_type) = style.frame_type {
            frame.frame_type = frame_type;
        }
        if let Some(clipping) = style.clipping {
            frame.clipping = clipping;
        }
        if let Some(opacity) = style.opacity {
            frame.opacity = opacity;
        }
        Ok(frame)
    }

    pub fn from_config(config: &FrameConfig, name: &str) -> Result<Self, FrameError> {
        let style = config.resolve(name)?;
        log::debug!("Building frame from style '{}'", name);
        Self::from_style(name, &style)
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn align(&self) -> DimAlign {
        self.align
    }

    pub fn pivot(&self) -> DimPivot {
        self.pivot
    }

    pub fn layout(&self) -> DimAutoLayout {
        self.layout
    }

    pub fn solver(&self) -> LayoutSolver {
        self.solver
    }

    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    pub fn clipping(&self) -> Clipping {
        self.clipping
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    pub fn length_axis(&self, parent_length: Dimension) -> Dimension {
        self.space.length_axis(parent_length)
    }

    pub fn depth_axis(&self, parent_length: Dimension) -> Dimension {
        self.space.depth_axis(parent_length)
    }

    /// Sizing per physical axis inside a parent laid out along `parent_length`.
    pub fn sizing(&self, parent_length: Dimension) -> DimSizing {
        self.space.sizing_dim(parent_length)
    }

    pub fn geometry(&self) -> &BoxFloat {
        &self.geometry
    }

    /// Write access for solvers. Indexed writes through this mark the frame laid out.
    pub fn geometry_mut(&mut self) -> &mut BoxFloat {
        &mut self.geometry
    }

    pub fn set_geometry(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.geometry.assign(x, y, w, h);
    }

    pub fn clear_geometry(&mut self) {
        self.geometry.clear();
    }

    pub fn is_laid_out(&self) -> bool {
        !self.geometry.is_null()
    }

    /// Position of this frame inside a parent of extent `space`, from its
    /// per-axis alignment and pivot.
    pub fn position_in(&self, space: DimFloat) -> DimFloat {
        let extent = self.geometry.extent();
        let mut position = DimFloat::ZERO;
        for axis in Dimension::AXES {
            let offset = self.align[axis].offset(space[axis], extent[axis]);
            position[axis] = self.pivot[axis].resolve(offset, space[axis], extent[axis]);
        }
        position
    }

    /// Writes the aligned position into the geometry, keeping its extent.
    /// Axes that are not auto-laid-out keep their current position. A frame
    /// with null geometry has no extent to place and is left unchanged.
    pub fn place_in(&mut self, space: DimFloat) {
        if self.geometry.is_null() {
            return;
        }
        let position = self.position_in(space);
        for axis in Dimension::AXES {
            if self.layout[axis] == AutoLayout::AutoLayout {
                if let Some(slot) = axis.slot() {
                    self.geometry[slot] = position[axis];
                }
            }
        }
    }

    /// Whether two laid-out frames overlap. Frames without geometry never do.
    pub fn overlaps(&self, other: &Frame) -> bool {
        self.is_laid_out() && other.is_laid_out() && self.geometry.intersects(&other.geometry)
    }
}

impl From<SpacePreset> for Frame {
    fn from(preset: SpacePreset) -> Self {
        Frame::new(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyframe_style::{Direction, Sizing};

    #[test]
    fn new_frame_has_preset_space_and_no_geometry() {
        let frame = Frame::new(SpacePreset::Div);
        assert_eq!(
            frame.space(),
            Space::new(Direction::Orthogonal, Sizing::Wrap, Sizing::Shrink)
        );
        assert!(!frame.is_laid_out());
        assert_eq!(frame.opacity(), Opacity::Clear);
        assert_eq!(frame.layout(), Dim::splat(AutoLayout::AutoLayout));
    }

    #[test]
    fn geometry_nullity_follows_box_rules() {
        let mut frame = Frame::new(SpacePreset::Item);
        frame.set_geometry(0.0, 0.0, 0.0, 0.0);
        assert!(!frame.is_laid_out());

        frame.geometry_mut()[2] = 0.0;
        assert!(frame.is_laid_out());

        frame.clear_geometry();
        assert!(!frame.is_laid_out());
    }

    #[test]
    fn position_uses_align_and_pivot() {
        let mut frame = Frame::new(SpacePreset::Item);
        frame.align = Dim::new(Align::Center, Align::Right);
        frame.set_geometry(0.0, 0.0, 20.0, 10.0);

        let position = frame.position_in(DimFloat::new(100.0, 50.0));
        assert_eq!(position, DimFloat::new(40.0, 40.0));

        frame.pivot = Dim::new(Pivot::Forward, Pivot::Reverse);
        let position = frame.position_in(DimFloat::new(100.0, 50.0));
        assert_eq!(position, DimFloat::new(40.0, 0.0));
    }

    #[test]
    fn place_in_skips_manual_axes() {
        let mut frame = Frame::new(SpacePreset::Item);
        frame.align = Dim::splat(Align::Right);
        frame.layout = Dim::new(AutoLayout::AutoLayout, AutoLayout::NoLayout);
        frame.set_geometry(5.0, 5.0, 10.0, 10.0);

        frame.place_in(DimFloat::new(100.0, 100.0));
        assert_eq!(frame.geometry().offset(), DimFloat::new(90.0, 5.0));
        assert_eq!(frame.geometry().extent(), DimFloat::new(10.0, 10.0));
    }

    #[test]
    fn place_in_leaves_unsized_frame_null() {
        let mut frame = Frame::new(SpacePreset::Item);
        frame.place_in(DimFloat::new(400.0, 300.0));
        assert!(!frame.is_laid_out());

        let mut board = Frame::new(SpacePreset::Board);
        board.set_geometry(0.0, 0.0, 400.0, 300.0);
        assert!(!frame.overlaps(&board));
    }

    #[test]
    fn overlap_ignores_frames_without_geometry() {
        let mut a = Frame::new(SpacePreset::Block);
        let mut b = Frame::new(SpacePreset::Block);
        assert!(!a.overlaps(&b));

        a.set_geometry(0.0, 0.0, 2.0, 2.0);
        b.set_geometry(1.0, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));

        b.clear_geometry();
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn missing_space_is_an_error() {
        let err = Frame::from_style("empty", &FrameStyle::default()).unwrap_err();
        assert!(matches!(err, FrameError::MissingSpace(name) if name == "empty"));
    }
}
