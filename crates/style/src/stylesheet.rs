//! Defines the per-frame style record that configuration resolves into.

use crate::align::Align;
use crate::axis::Pivot;
use crate::layout::{AutoLayout, Flow, FrameType, LayoutSolver};
use crate::space::{Space, SpacePreset};
use crate::surface::{Clipping, Opacity};
use serde::{Deserialize, Serialize};
use toyframe_types::Dim;

/// Optional frame properties. Unset fields defer to whatever the style is
/// merged onto.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<Space>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Dim<Align>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<Dim<Pivot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Dim<AutoLayout>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<Flow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver: Option<LayoutSolver>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_type: Option<FrameType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipping: Option<Clipping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Opacity>,
}

impl FrameStyle {
    pub fn with_preset(preset: SpacePreset) -> Self {
        Self {
            space: Some(Space::preset(preset)),
            ..Self::default()
        }
    }

    /// Overlays every property `other` sets onto `self`.
    pub fn merge(&mut self, other: &FrameStyle) {
        if other.space.is_some() {
            self.space = other.space;
        }
        if other.align.is_some() {
            self.align = other.align;
        }
        if other.pivot.is_some() {
            self.pivot = other.pivot;
        }
        if other.layout.is_some() {
            self.layout = other.layout;
        }
        if other.flow.is_some() {
            self.flow = other.flow;
        }
        if other.solver.is_some() {
            self.solver = other.solver;
        }
        if other.frame_type.is_some() {
            self.frame_type = other.frame_type;
        }
        if other.clipping.is_some() {
            self.clipping = other.clipping;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
    }

    /// Per-axis automation: the explicit `layout`, else what `flow` implies.
    pub fn resolved_layout(&self) -> Option<Dim<AutoLayout>> {
        self.layout
            .or_else(|| self.flow.map(|flow| Dim::splat(flow.auto_layout())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Direction;
    use crate::sizing::Sizing;

    #[test]
    fn merge_overrides_only_set_fields() {
        let mut base = FrameStyle::with_preset(SpacePreset::Stack);
        base.clipping = Some(Clipping::Clip);

        let overlay = FrameStyle {
            align: Some(Dim::new(Align::Center, Align::Right)),
            clipping: Some(Clipping::NoClip),
            ..FrameStyle::default()
        };
        base.merge(&overlay);

        assert_eq!(base.space, Some(Space::preset(SpacePreset::Stack)));
        assert_eq!(base.align, Some(Dim::new(Align::Center, Align::Right)));
        assert_eq!(base.clipping, Some(Clipping::NoClip));
        assert_eq!(base.opacity, None);
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "space": "paragraph wrap shrink",
            "align": ["center", "out-left"],
            "frameType": "master-layer",
            "opacity": "hollow"
        }"#;
        let style: FrameStyle = serde_json::from_str(json).unwrap();
        assert_eq!(
            style.space,
            Some(Space::new(Direction::Paragraph, Sizing::Wrap, Sizing::Shrink))
        );
        assert_eq!(style.align, Some(Dim::new(Align::Center, Align::OutLeft)));
        assert_eq!(style.frame_type, Some(FrameType::MasterLayer));
        assert_eq!(style.opacity, Some(Opacity::Hollow));
        assert_eq!(style.pivot, None);
    }

    #[test]
    fn skips_unset_fields_when_serializing() {
        let style = FrameStyle {
            flow: Some(Flow::Overlay),
            ..FrameStyle::default()
        };
        assert_eq!(serde_json::to_string(&style).unwrap(), r#"{"flow":"overlay"}"#);
    }

    #[test]
    fn layout_falls_back_to_flow() {
        let mut style = FrameStyle {
            flow: Some(Flow::Free),
            ..FrameStyle::default()
        };
        assert_eq!(style.resolved_layout(), Some(Dim::splat(AutoLayout::NoLayout)));

        style.layout = Some(Dim::new(AutoLayout::AutoSize, AutoLayout::AutoLayout));
        assert_eq!(
            style.resolved_layout(),
            Some(Dim::new(AutoLayout::AutoSize, AutoLayout::AutoLayout))
        );
        assert_eq!(FrameStyle::default().resolved_layout(), None);
    }
}
