use std::path::Path;

use sketchpad::{Canvas, CanvasEvent, Editor, EditorHistory, Point, ToolsConfig, new_tool};

/// Demonstration driver: wires a canvas with the configured tools,
/// runs a selection and an erase gesture, then walks the editor
/// through edit -> snapshot -> undo.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ToolsConfig::load_or_default(Path::new("tools.json"));

    let mut canvas = Canvas::new();
    canvas.events().subscribe(Box::new(|event: &CanvasEvent| {
        println!("canvas event: {:?}", event);
    }));

    let default_tool = new_tool(&config.default_tool, &config)
        .ok_or_else(|| format!("unknown default tool {:?}", config.default_tool))?;
    canvas.set_tool(default_tool);
    canvas.pointer_down(Point::new(4.0, 4.0))?;
    canvas.pointer_up(Point::new(52.0, 36.0))?;

    let eraser = new_tool("eraser", &config).ok_or("eraser tool not registered")?;
    canvas.set_tool(eraser);
    canvas.pointer_down(Point::new(10.0, 10.0))?;
    canvas.pointer_up(Point::new(40.0, 12.0))?;

    let mut editor = Editor::new();
    let mut history = EditorHistory::new();

    editor.set_content("draft outline");
    history.push(editor.create_snapshot());
    editor.set_content("draft outline, revised");
    history.push(editor.create_snapshot());

    editor.set_content("an edit worth undoing");
    println!("content before undo: {:?}", editor.content());

    let snapshot = history.pop()?;
    editor.restore(&snapshot);
    println!("content after undo:  {:?}", editor.content());

    Ok(())
}
