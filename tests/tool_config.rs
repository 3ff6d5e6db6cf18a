use sketchpad::{EraserConfig, Point, ToolAction, ToolsConfig, new_tool};

#[test]
fn test_config_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tools.json");

    let config = ToolsConfig {
        default_tool: "eraser".to_string(),
        eraser: EraserConfig { width: 24.0 },
    };
    config.save(&path).unwrap();

    let loaded = ToolsConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_or_default_falls_back_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");

    let config = ToolsConfig::load_or_default(&path);
    assert_eq!(config, ToolsConfig::default());
    assert_eq!(config.default_tool, "selection");
}

#[test]
fn test_load_or_default_falls_back_on_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tools.json");
    std::fs::write(&path, "{ not json").unwrap();

    let config = ToolsConfig::load_or_default(&path);
    assert_eq!(config, ToolsConfig::default());
}

#[test]
fn test_factory_builds_configured_tools() {
    let config = ToolsConfig {
        eraser: EraserConfig { width: 6.0 },
        ..Default::default()
    };

    let mut eraser = new_tool("eraser", &config).unwrap();
    assert_eq!(eraser.name(), "eraser");

    // The configured width shows up in the committed region
    eraser.on_pointer_down(Point::new(0.0, 0.0));
    let action = eraser.on_pointer_up(Point::new(10.0, 0.0));
    let Some(ToolAction::EraseCommitted { region }) = action else {
        panic!("expected an erase commit, got {:?}", action);
    };
    assert_eq!(region.min, Point::new(-3.0, -3.0));
    assert_eq!(region.max, Point::new(13.0, 3.0));

    let selection = new_tool("selection", &config).unwrap();
    assert_eq!(selection.name(), "selection");
}

#[test]
fn test_factory_rejects_unknown_tool_names() {
    let config = ToolsConfig::default();
    assert!(new_tool("airbrush", &config).is_none());
}
