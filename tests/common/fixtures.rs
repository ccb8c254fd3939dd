use serde_json::{Value, json};

/// A document config block.
pub fn config(max_width: f32, space_width: f32, indent_width: f32) -> Value {
    json!({
        "maxWidth": max_width,
        "spaceWidth": space_width,
        "indentWidth": indent_width
    })
}

pub fn element(content: &str, width: f32) -> Value {
    json!({ "element": { "content": content, "width": width } })
}

/// The greeting/indent example with a soft break before a hard break.
pub fn greeting_document() -> Value {
    json!({
        "config": config(20.0, 1.0, 4.0),
        "tree": {
            "concat": [
                element("Hello", 5.0),
                "line",
                "hardLine",
                { "indent": { "concat": [
                    element("test", 4.0),
                    "line",
                    element("spotlight", 9.0),
                    "line",
                    element("again", 5.0)
                ]}}
            ]
        }
    })
}

/// A function signature whose parameters are joined by `,` plus a soft break.
pub fn signature_document(max_width: f32) -> Value {
    json!({
        "config": config(max_width, 1.0, 4.0),
        "tree": {
            "concat": [
                element("fn", 2.0),
                "line",
                element("layout(", 7.0),
                { "indent": { "join": {
                    "separator": { "concat": [element(",", 1.0), "line"] },
                    "children": [
                        element("tree: &Command", 14.0),
                        element("config: &LayoutConfig", 21.0),
                        element("engine: &LayoutEngine", 21.0)
                    ]
                }}},
                element(")", 1.0)
            ]
        }
    })
}
