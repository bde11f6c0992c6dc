use serde_json::{Value, json};

/// A config with a default style and one named style per layout archetype.
pub fn archetype_config() -> Value {
    json!({
        "defaultStyle": "base",
        "styles": {
            "base": { "space": "item", "opacity": "clear" },
            "toolbar": { "space": "line", "align": ["left", "center"] },
            "dialog": {
                "space": "sheet",
                "align": ["center", "center"],
                "flow": "free",
                "frameType": "layer",
                "clipping": "clip"
            },
            "panel": {
                "space": { "direction": "orthogonal", "sizingLength": "expand", "sizingDepth": "wrap" },
                "solver": "grid",
                "pivot": ["reverse", "forward"]
            },
            "caption": { "opacity": "hollow" }
        }
    })
}
