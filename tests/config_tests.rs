mod common;

use common::fixtures::archetype_config;
use common::{TestResult, config_from_value, init_logging};
use serde_json::json;
use toyframe::{
    Align, AutoLayout, Clipping, Dim, Direction, Frame, FrameError, FrameType, LayoutSolver,
    Opacity, Pivot, Sizing, Space, SpacePreset,
};

#[test]
fn test_frame_from_preset_style() -> TestResult {
    init_logging();
    let config = config_from_value(archetype_config())?;
    let toolbar = Frame::from_config(&config, "toolbar")?;

    assert_eq!(toolbar.space(), Space::preset(SpacePreset::Line));
    assert_eq!(toolbar.align(), Dim::new(Align::Left, Align::Center));
    assert_eq!(toolbar.opacity(), Opacity::Clear);
    Ok(())
}

#[test]
fn test_frame_flow_sets_auto_layout() -> TestResult {
    init_logging();
    let config = config_from_value(archetype_config())?;
    let dialog = Frame::from_config(&config, "dialog")?;

    assert_eq!(dialog.space(), Space::preset(SpacePreset::Sheet));
    assert_eq!(dialog.layout(), Dim::splat(AutoLayout::NoLayout));
    assert_eq!(dialog.frame_type(), FrameType::Layer);
    assert_eq!(dialog.clipping(), Clipping::Clip);
    Ok(())
}

#[test]
fn test_frame_from_explicit_space_map() -> TestResult {
    init_logging();
    let config = config_from_value(archetype_config())?;
    let panel = Frame::from_config(&config, "panel")?;

    assert_eq!(
        panel.space(),
        Space::new(Direction::Orthogonal, Sizing::Expand, Sizing::Wrap)
    );
    assert_eq!(panel.solver(), LayoutSolver::Grid);
    assert_eq!(panel.pivot(), Dim::new(Pivot::Reverse, Pivot::Forward));
    Ok(())
}

#[test]
fn test_style_without_space_inherits_default() -> TestResult {
    init_logging();
    let config = config_from_value(archetype_config())?;
    let caption = Frame::from_config(&config, "caption")?;

    assert_eq!(caption.space(), Space::preset(SpacePreset::Item));
    assert_eq!(caption.opacity(), Opacity::Hollow);
    Ok(())
}

#[test]
fn test_unknown_style_name() -> TestResult {
    init_logging();
    let config = config_from_value(archetype_config())?;
    let err = Frame::from_config(&config, "sidebar").unwrap_err();
    assert!(matches!(err, FrameError::UnknownStyle(ref name) if name == "sidebar"));
    assert_eq!(err.to_string(), "No frame style named 'sidebar'");
    Ok(())
}

#[test]
fn test_missing_space_without_default() -> TestResult {
    init_logging();
    let config = config_from_value(json!({ "styles": { "loose": { "opacity": "opaque" } } }))?;
    let err = Frame::from_config(&config, "loose").unwrap_err();
    assert!(matches!(err, FrameError::MissingSpace(_)));
    Ok(())
}

#[test]
fn test_invalid_values_are_rejected() {
    init_logging();
    let bad_space = config_from_value(json!({ "styles": { "x": { "space": "sideways" } } }));
    assert!(matches!(bad_space, Err(FrameError::Json(_))));

    let bad_align = config_from_value(json!({ "styles": { "x": { "align": ["middle", "left"] } } }));
    assert!(bad_align.is_err());

    assert!(matches!(
        toyframe::FrameConfig::from_json("not json"),
        Err(FrameError::Json(_))
    ));
}

#[test]
fn test_config_serializes_back() -> TestResult {
    init_logging();
    let config = config_from_value(archetype_config())?;
    let json = serde_json::to_string(&config)?;
    let reparsed = toyframe::FrameConfig::from_json(&json)?;
    assert_eq!(reparsed, config);
    Ok(())
}
