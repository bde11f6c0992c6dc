use crate::axis::Direction::{self, Orthogonal, Paragraph, Parallel, Reading};
use crate::sizing::Sizing::{self, Expand, Fixed, Shrink, Wrap};
use crate::space::{Space, SpacePreset, SPACE_PRESETS};
use toyframe_types::{Dim, Dimension};

fn expected(preset: SpacePreset) -> (Direction, Sizing, Sizing) {
    match preset {
        SpacePreset::Sheet => (Paragraph, Wrap, Wrap),
        SpacePreset::Flex => (Parallel, Wrap, Wrap),
        SpacePreset::Item => (Reading, Shrink, Shrink),
        SpacePreset::Unit => (Paragraph, Shrink, Shrink),
        SpacePreset::Block => (Paragraph, Fixed, Fixed),
        SpacePreset::Line => (Reading, Wrap, Shrink),
        SpacePreset::Stack => (Paragraph, Shrink, Wrap),
        SpacePreset::Div => (Orthogonal, Wrap, Shrink),
        SpacePreset::Spacer => (Parallel, Wrap, Shrink),
        SpacePreset::Board => (Reading, Expand, Expand),
        SpacePreset::Layout => (Paragraph, Expand, Expand),
    }
}

#[test]
fn test_block_preset() {
    assert_eq!(
        Space::preset(SpacePreset::Block),
        Space::new(Paragraph, Fixed, Fixed)
    );
}

#[test]
fn test_every_preset_matches_table() {
    for preset in SpacePreset::ALL {
        let (direction, length, depth) = expected(preset);
        assert_eq!(
            Space::preset(preset),
            Space::new(direction, length, depth),
            "preset {}",
            preset
        );
        assert_eq!(Space::from(preset), SPACE_PRESETS[preset as usize]);
    }
}

#[test]
fn test_preset_round_trips_through_as_preset() {
    for preset in SpacePreset::ALL {
        assert_eq!(Space::preset(preset).as_preset(), Some(preset));
    }
    assert_eq!(Space::new(Reading, Fixed, Expand).as_preset(), None);
}

#[test]
fn test_sizing_dim_projects_onto_axes() {
    let line = Space::preset(SpacePreset::Line);
    assert_eq!(line.sizing_dim(Dimension::Y), Dim::new(Wrap, Shrink));

    let stack = Space::preset(SpacePreset::Stack);
    assert_eq!(stack.sizing_dim(Dimension::X), Dim::new(Wrap, Shrink));

    // Div runs across its parent.
    let div = Space::preset(SpacePreset::Div);
    assert_eq!(div.length_axis(Dimension::Y), Dimension::X);
    assert_eq!(div.sizing_dim(Dimension::Y), Dim::new(Wrap, Shrink));
    assert_eq!(div.sizing_dim(Dimension::X), Dim::new(Shrink, Wrap));

    let undirected = Space::new(Direction::None, Expand, Fixed);
    assert_eq!(undirected.sizing_dim(Dimension::X), Dim::splat(Expand));
}

#[test]
fn test_space_deserializes_from_all_forms() {
    let from_preset: Space = serde_json::from_str(r#""board""#).unwrap();
    assert_eq!(from_preset, Space::preset(SpacePreset::Board));

    let from_triple: Space = serde_json::from_str(r#""ORTHOGONAL WRAP SHRINK""#).unwrap();
    assert_eq!(from_triple, Space::new(Orthogonal, Wrap, Shrink));

    let from_map: Space = serde_json::from_str(
        r#"{ "direction": "parallel", "sizingLength": "expand", "sizingDepth": "fixed" }"#,
    )
    .unwrap();
    assert_eq!(from_map, Space::new(Parallel, Expand, Fixed));

    assert!(serde_json::from_str::<Space>(r#""nowhere""#).is_err());
}

#[test]
fn test_space_serializes_as_map() {
    let json = serde_json::to_string(&Space::preset(SpacePreset::Line)).unwrap();
    assert_eq!(
        json,
        r#"{"direction":"reading","sizingLength":"wrap","sizingDepth":"shrink"}"#
    );
}

#[test]
fn test_space_display() {
    assert_eq!(
        Space::preset(SpacePreset::Spacer).to_string(),
        "parallel wrap shrink"
    );
}
